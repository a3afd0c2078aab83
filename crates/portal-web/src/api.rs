//! API Client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use portal_core::action::{PaymentRequest, PaymentSession, SessionEndpoint};
use portal_core::error::{PortalError, Result};

/// Subscription status for the signed-in member
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Active subscription link, if any
    #[serde(default)]
    pub subscription_url: Option<String>,
}

/// HTTP client for the portal backend
pub struct PortalApi {
    client: reqwest::Client,
    base: String,
}

impl PortalApi {
    pub fn new() -> Self {
        let base = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into());

        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Fetch the signed-in member's subscription status
    pub async fn fetch_profile(&self) -> Result<ProfileSummary> {
        let response = self
            .client
            .get(self.url("/profile/summary"))
            .send()
            .await
            .map_err(|err| PortalError::Transport(err.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|err| PortalError::Transport(err.to_string())),
            reqwest::StatusCode::UNAUTHORIZED => Err(PortalError::AuthRequired),
            status => Err(PortalError::Gateway {
                status: status.as_u16(),
            }),
        }
    }
}

impl Default for PortalApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SessionEndpoint for PortalApi {
    async fn create_session(&self, request: &PaymentRequest) -> Result<PaymentSession> {
        let response = self
            .client
            .post(self.url("/payment/create"))
            .json(request)
            .send()
            .await
            .map_err(|err| PortalError::Transport(err.to_string()))?;

        match response.status() {
            // An unreadable success body lands on Transport: the redirect
            // URL never arrived, which is indistinguishable from a dropped
            // connection as far as the user is concerned.
            status if status.is_success() => response
                .json()
                .await
                .map_err(|err| PortalError::Transport(err.to_string())),
            reqwest::StatusCode::UNAUTHORIZED => Err(PortalError::AuthRequired),
            // The body of other rejections is not interpreted.
            status => Err(PortalError::Gateway {
                status: status.as_u16(),
            }),
        }
    }
}
