//! Error Types

use thiserror::Error;

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Notice shown when the payment backend rejects a session request
pub const PAYMENT_FAILED_NOTICE: &str = "Payment could not be created. Please try again later.";

/// Notice shown when a request never completed
pub const CONNECTION_LOST_NOTICE: &str = "Could not reach the server. Please check your connection.";

/// Errors produced by the portal's client-side actions
#[derive(Error, Debug)]
pub enum PortalError {
    /// The backend answered 401; the session cookie is missing or stale
    #[error("authentication required")]
    AuthRequired,

    /// The backend rejected the request with some other non-2xx status
    #[error("request rejected with status {status}")]
    Gateway { status: u16 },

    /// The request never completed, or the success body was unreadable
    #[error("transport error: {0}")]
    Transport(String),

    /// The asynchronous clipboard write failed
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl PortalError {
    /// Convert to the fixed copy shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            PortalError::AuthRequired => "Please sign in to continue.",
            PortalError::Gateway { .. } => PAYMENT_FAILED_NOTICE,
            PortalError::Transport(_) => CONNECTION_LOST_NOTICE,
            PortalError::Clipboard(_) => "Copying to the clipboard is unavailable.",
        }
    }
}
