//! # portal-core
//!
//! Client-side interaction logic for the subscription portal frontend: the
//! single-shot busy/success/error action controller, platform-targeted
//! download link resolution, and clipboard copying with a timed
//! acknowledgement.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Browser page                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌──────────────┐  │
//! │  │ PaymentInitiator│  │ platform::      │  │ copy_with_ack│  │
//! │  │ FormSubmitGuard │  │ resolve (table) │  │ (ack window) │  │
//! │  └────────┬────────┘  └─────────────────┘  └──────┬───────┘  │
//! │           │ TriggerSurface / Navigator / Notifier │          │
//! │           └── trait seams implemented by the host ┘          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything network- or DOM-shaped enters through a trait, so this crate
//! tests natively while the web crate supplies the browser implementations.

pub mod action;
pub mod clipboard;
pub mod error;
pub mod platform;

pub use action::{
    ActionOutcome, ActionUi, BusyGuard, BusyPresentation, FormSubmitGuard, Navigator, Notifier,
    PaymentInitiator, PaymentRequest, PaymentSession, SessionEndpoint, TriggerSurface, UiBusyState,
    LOGIN_URL, SPINNER_CLASS,
};
pub use clipboard::{copy_with_ack, AckSurface, AckTimer, ClipboardSink, CopySource, ACK_WINDOW};
pub use error::{PortalError, Result};
pub use platform::{resolve, ClientHints, PlatformLink};
