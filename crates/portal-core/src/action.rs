//! Single-Shot Action Controller
//!
//! A user-triggered operation that flips its trigger into a busy state,
//! performs one network round trip, and resolves into exactly one of
//! redirect, recoverable error, or transport error. The trigger is restored
//! to its pre-action snapshot on every path that does not navigate away.
//!
//! ```text
//! click ──▶ BusyGuard::engage ──▶ create_session ──▶ outcome
//!              (snapshot +            (single            │
//!               spinner,             suspension    ┌─────┴──────┐
//!               disabled)             point)    navigate     notify
//!                                                keep_busy    Drop restores
//! ```
//!
//! The UI enters through trait seams (`TriggerSurface`, `Navigator`,
//! `Notifier`) bundled in an [`ActionUi`] context, so pages hand the
//! controller exactly the slots it touches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result, CONNECTION_LOST_NOTICE};

/// Login entry point used when the backend signals an expired session
pub const LOGIN_URL: &str = "/login";

/// Icon class the busy presentation swaps in
pub const SPINNER_CLASS: &str = "spinner-border spinner-border-sm";

/// Payload for creating a payment session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Tariff the user picked
    pub tariff_name: String,

    /// Price shown on the card, echoed for server-side validation
    pub price: f64,
}

/// Payment session created by the backend
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Hosted checkout page to send the user to
    pub payment_url: String,
}

/// How a single invocation resolved
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigated to the returned URL; the trigger stays busy
    Redirect(String),

    /// Navigated to the login entry point; never shown as an error
    AuthRequired,

    /// The backend rejected the request; the user may retry immediately
    RecoverableError(String),

    /// The request never completed; retryable with distinct copy
    TransportError,
}

/// Snapshot of the trigger's presentation before an action starts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiBusyState {
    pub label: String,
    pub icon_class: String,
    pub disabled: bool,
}

/// What the trigger shows while the action is pending
#[derive(Clone, Debug)]
pub enum BusyPresentation {
    /// Replace the content with a spinner
    Spinner,

    /// Busy label next to a spinner icon
    LabeledSpinner { label: String },
}

/// The interactive element that starts an action.
///
/// `set_busy` must also disable the trigger and `restore` must re-enable
/// it; the disabled flag is the only re-entrancy exclusion while the
/// invocation is suspended.
pub trait TriggerSurface {
    fn snapshot(&self) -> UiBusyState;
    fn set_busy(&self, presentation: &BusyPresentation);
    fn restore(&self, snapshot: &UiBusyState);
}

/// Replaces the browsing context's location
pub trait Navigator {
    fn assign(&self, url: &str);
}

/// Blocking user notification
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Backend call that creates the payment session. Called exactly once per
/// invocation; no timeout is applied beyond the transport's own.
#[async_trait(?Send)]
pub trait SessionEndpoint {
    async fn create_session(&self, request: &PaymentRequest) -> Result<PaymentSession>;
}

/// UI slots an invocation touches, passed explicitly by the page
pub struct ActionUi<'a> {
    pub trigger: &'a dyn TriggerSurface,
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
}

/// Scoped hold on the trigger's busy state.
///
/// Engaging snapshots the trigger and applies the busy presentation before
/// anything can suspend. Dropping restores the snapshot, so restoration
/// runs on every exit path, including unwinding out of the notifier. The
/// navigation outcomes call [`BusyGuard::keep_busy`] instead: the page is
/// being left and the trigger intentionally stays busy.
pub struct BusyGuard<'a> {
    trigger: &'a dyn TriggerSurface,
    snapshot: UiBusyState,
    armed: bool,
}

impl<'a> BusyGuard<'a> {
    pub fn engage(trigger: &'a dyn TriggerSurface, presentation: &BusyPresentation) -> Self {
        let snapshot = trigger.snapshot();
        trigger.set_busy(presentation);
        Self {
            trigger,
            snapshot,
            armed: true,
        }
    }

    /// Leave the trigger busy; navigation supersedes restoration
    pub fn keep_busy(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.trigger.restore(&self.snapshot);
        }
    }
}

/// Payment flow: create a session and send the user to the hosted
/// checkout page.
pub struct PaymentInitiator<E> {
    endpoint: E,
    login_url: &'static str,
}

impl<E: SessionEndpoint> PaymentInitiator<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            login_url: LOGIN_URL,
        }
    }

    /// Run one invocation from a user event.
    ///
    /// The busy presentation is applied synchronously before the request is
    /// issued, so the trigger can never be observed idle after the call is
    /// in flight. Returns the outcome it acted on.
    pub async fn run(&self, ui: ActionUi<'_>, request: PaymentRequest) -> ActionOutcome {
        let guard = BusyGuard::engage(ui.trigger, &BusyPresentation::Spinner);

        let outcome = match self.endpoint.create_session(&request).await {
            Ok(session) => ActionOutcome::Redirect(session.payment_url),
            Err(PortalError::AuthRequired) => ActionOutcome::AuthRequired,
            Err(err @ PortalError::Gateway { .. }) => {
                tracing::warn!(error = %err, tariff = %request.tariff_name, "payment session rejected");
                ActionOutcome::RecoverableError(err.user_message().to_string())
            }
            Err(err) => {
                tracing::error!(error = %err, "payment request did not complete");
                ActionOutcome::TransportError
            }
        };

        match &outcome {
            ActionOutcome::Redirect(url) => {
                ui.navigator.assign(url);
                guard.keep_busy();
            }
            ActionOutcome::AuthRequired => {
                ui.navigator.assign(self.login_url);
                guard.keep_busy();
            }
            ActionOutcome::RecoverableError(message) => ui.notifier.alert(message),
            ActionOutcome::TransportError => ui.notifier.alert(CONNECTION_LOST_NOTICE),
        }

        outcome
    }
}

/// Form flow: decorate a native submission with the busy presentation.
///
/// One-way transition with no restore path. The native submission
/// navigates or re-renders the page, which discards the mutated state; a
/// server-side validation failure that re-renders the same page starts
/// from fresh markup either way.
pub struct FormSubmitGuard {
    label: String,
}

impl FormSubmitGuard {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn engage(&self, trigger: &dyn TriggerSurface) {
        trigger.set_busy(&BusyPresentation::LabeledSpinner {
            label: self.label.clone(),
        });
    }
}
