//! Wallet API client
//!
//! Fetches the decoded activity list for an address from the wallet-tracker
//! backend:
//!
//! `GET {base_url}/api/wallet/{address}/activities`
//!
//! Returns a JSON array of `WalletActivity` records, newest first. Failures
//! carry an `{"error": "..."}` body.

use {
    crate::activity::{ErrorResponse, WalletActivity},
    async_trait::async_trait,
    std::time::Duration,
};

/// Message used when a failed response has no readable error body
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch wallet activities";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response from the API
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Connection, timeout or TLS failure
    #[error("Request failed: {0}")]
    Transport(String),
    /// 2xx response whose body is not an activity list
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Source of wallet activity lists
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_activities(&self, address: &str) -> Result<Vec<WalletActivity>, FetchError>;
}

/// HTTP client for the wallet API
#[derive(Debug, Clone)]
pub struct WalletApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl WalletApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn activities_url(&self, address: &str) -> String {
        format!("{}/api/wallet/{}/activities", self.base_url, address)
    }
}

#[async_trait]
impl ActivitySource for WalletApiClient {
    async fn fetch_activities(&self, address: &str) -> Result<Vec<WalletActivity>, FetchError> {
        let url = self.activities_url(address);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the API's own message, fall back to a generic one
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .ok()
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string());

            log::warn!("Wallet API returned {} for {}: {}", status, address, message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let activities: Vec<WalletActivity> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        log::info!("Found {} activities for address: {}", activities.len(), address);
        Ok(activities)
    }
}
