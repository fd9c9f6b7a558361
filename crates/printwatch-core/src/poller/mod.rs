//! Periodic status fetching.
//!
//! The poller issues one GET per tick and decodes the body into a
//! [`StatusPayload`]. It holds no state across ticks; all durability lives in
//! the reconciler. There is no retry within a tick — the next scheduled tick
//! is the retry.

pub mod errors;

use std::time::Duration;

use tracing::debug;

use crate::telemetry::StatusPayload;
pub use errors::PollError;

pub struct StatusPoller {
    client: reqwest::Client,
    url: String,
}

impl StatusPoller {
    /// Build a poller for the given status endpoint.
    ///
    /// The timeout applies per request, so a hung call from tick N cannot
    /// outlive more than a few subsequent ticks.
    pub fn new(url: impl Into<String>, request_timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| PollError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode one status snapshot.
    ///
    /// Transport failures, non-success HTTP statuses and undecodable bodies
    /// are all a [`PollError`]; none of them carries partial data.
    pub async fn fetch(&self) -> Result<StatusPayload, PollError> {
        debug!(event = "core.poller.fetch_started", url = %self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PollError::Transport {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| PollError::Transport {
            url: self.url.clone(),
            message: e.to_string(),
        })?;

        let payload: StatusPayload =
            serde_json::from_str(&body).map_err(|e| PollError::Decode {
                message: e.to_string(),
            })?;

        debug!(
            event = "core.poller.fetch_completed",
            url = %self.url,
            has_temps = payload.temps.is_some(),
            has_state = payload.state.is_some(),
        );

        Ok(payload)
    }
}
