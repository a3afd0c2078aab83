//! Subscription Portal Web Frontend
//!
//! Leptos-based WASM frontend for the member portal: dashboard with the
//! subscription link and platform-matched app download, tariff checkout,
//! and password reset.

mod api;
mod app;
mod components;
mod pages;
mod ui;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
