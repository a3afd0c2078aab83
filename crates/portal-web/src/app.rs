//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{DashboardPage, ResetPasswordPage, TariffsPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/tariffs") view=TariffsPage />
                    <Route path=path!("/forgot-password") view=ResetPasswordPage />
                </Routes>
            </main>
        </Router>
    }
}
