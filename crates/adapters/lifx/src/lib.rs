//! # wakehub-adapter-lifx
//!
//! `LightingClient` implementation for the LIFX HTTP API.
//!
//! One request per call: `PUT /v1/lights/{selector}/state` with the desired
//! power and fade duration. The vendor answers with a per-bulb result list
//! (multi-status), which maps directly onto the port's per-light success
//! map. A selector matching nothing is a vendor-side 404 and comes back as
//! an empty map, not an error — the orchestrator decides about fallback.

mod config;
mod response;

use std::collections::BTreeMap;
use std::time::Duration;

use wakehub_app::ports::{LightingClient, LightingError};
use wakehub_domain::lighting::{LightPower, LightSelector};

pub use config::LifxConfig;
use response::SetStateResponse;

/// LIFX HTTP API client.
pub struct LifxClient {
    http: reqwest::Client,
    config: LifxConfig,
}

impl LifxClient {
    /// Create a client for the configured account.
    ///
    /// # Errors
    ///
    /// Returns [`LightingError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: LifxConfig) -> Result<Self, LightingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| LightingError::Transport(err.to_string()))?;
        Ok(Self { http, config })
    }

    fn state_url(&self, selector: &LightSelector) -> String {
        format!(
            "{}/lights/{selector}/state",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl LightingClient for LifxClient {
    #[tracing::instrument(skip(self), fields(%selector, %power))]
    async fn set_power(
        &self,
        selector: &LightSelector,
        power: LightPower,
        transition: Duration,
    ) -> Result<BTreeMap<String, bool>, LightingError> {
        let body = serde_json::json!({
            "power": power.as_str(),
            "duration": transition.as_secs_f64(),
        });

        let response = self
            .http
            .put(self.state_url(selector))
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(|err| LightingError::Transport(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // Vendor convention: the selector matched zero lights.
            tracing::debug!("selector matched no lights");
            return Ok(BTreeMap::new());
        }
        if !status.is_success() {
            return Err(LightingError::Status(status.as_u16()));
        }

        let parsed: SetStateResponse = response
            .json()
            .await
            .map_err(|err| LightingError::Transport(err.to_string()))?;
        Ok(parsed.into_status_map())
    }
}
