//! Browser Adapters
//!
//! Implementations of the portal-core trait seams over Leptos signals and
//! web-sys. Anything that cannot reach its browser service (no window, no
//! input node) degrades to a no-op instead of failing the page.

use std::time::Duration;

use async_trait::async_trait;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use portal_core::action::{BusyPresentation, Navigator, Notifier, TriggerSurface, UiBusyState, SPINNER_CLASS};
use portal_core::clipboard::{AckSurface, AckTimer, ClipboardSink, CopySource};
use portal_core::error::{PortalError, Result};
use portal_core::platform::ClientHints;

const ACK_IDLE_CLASS: &str = "btn btn-outline-secondary";
const ACK_SUCCESS_CLASS: &str = "btn btn-success";

/// Trigger surface backed by the signals a button view renders from
#[derive(Clone, Copy)]
pub struct SignalTrigger {
    pub label: RwSignal<String>,
    pub icon_class: RwSignal<String>,
    pub disabled: RwSignal<bool>,
}

impl SignalTrigger {
    pub fn new(label: &str, icon_class: &str) -> Self {
        Self {
            label: RwSignal::new(label.into()),
            icon_class: RwSignal::new(icon_class.into()),
            disabled: RwSignal::new(false),
        }
    }
}

impl TriggerSurface for SignalTrigger {
    fn snapshot(&self) -> UiBusyState {
        UiBusyState {
            label: self.label.get_untracked(),
            icon_class: self.icon_class.get_untracked(),
            disabled: self.disabled.get_untracked(),
        }
    }

    fn set_busy(&self, presentation: &BusyPresentation) {
        match presentation {
            BusyPresentation::Spinner => {
                self.label.set(String::new());
                self.icon_class.set(SPINNER_CLASS.into());
            }
            BusyPresentation::LabeledSpinner { label } => {
                self.label.set(label.clone());
                self.icon_class.set(SPINNER_CLASS.into());
            }
        }
        self.disabled.set(true);
    }

    fn restore(&self, snapshot: &UiBusyState) {
        self.label.set(snapshot.label.clone());
        self.icon_class.set(snapshot.icon_class.clone());
        self.disabled.set(snapshot.disabled);
    }
}

/// Copy-button style, flipped between the outline and success looks
#[derive(Clone, Copy)]
pub struct SignalAck {
    pub class: RwSignal<String>,
}

impl SignalAck {
    pub fn new() -> Self {
        Self {
            class: RwSignal::new(ACK_IDLE_CLASS.into()),
        }
    }
}

impl Default for SignalAck {
    fn default() -> Self {
        Self::new()
    }
}

impl AckSurface for SignalAck {
    fn acknowledge(&self) {
        self.class.set(ACK_SUCCESS_CLASS.into());
    }

    fn reset(&self) {
        self.class.set(ACK_IDLE_CLASS.into());
    }
}

/// Copy source over the subscription link input
#[derive(Clone, Copy)]
pub struct InputSource(pub NodeRef<html::Input>);

impl CopySource for InputSource {
    fn value(&self) -> Option<String> {
        self.0.get_untracked().map(|input| input.value())
    }

    fn select(&self) {
        if let Some(input) = self.0.get_untracked() {
            input.select();
            let _ = input.set_selection_range(0, 99_999);
        }
    }
}

/// Navigation by replacing the browsing context's location
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn assign(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

/// Blocking notification via `window.alert`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Clipboard writes through the asynchronous Clipboard API
pub struct WebClipboard;

#[async_trait(?Send)]
impl ClipboardSink for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| PortalError::Clipboard("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map_err(|err| PortalError::Clipboard(format!("{err:?}")))?;
        Ok(())
    }
}

/// One-shot `setTimeout` scheduling
pub struct WindowTimer;

impl AckTimer for WindowTimer {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::once_into_js(callback);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            handler.unchecked_ref(),
            i32::try_from(delay.as_millis()).unwrap_or(i32::MAX),
        );
    }
}

/// Probe the user agent and the `MSStream` window global.
///
/// `None` outside a browsing context, in which case platform resolution is
/// skipped entirely.
pub fn client_hints() -> Option<ClientHints> {
    let window = web_sys::window()?;
    let user_agent = window.navigator().user_agent().ok()?;
    let has_ms_stream =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("MSStream")).unwrap_or(false);

    Some(ClientHints {
        user_agent,
        has_ms_stream,
    })
}
