//! LIFX account configuration.

use serde::Deserialize;

/// Configuration for the LIFX HTTP API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LifxConfig {
    /// Personal access token for the vendor account.
    pub token: String,
    /// API base URL, overridable for testing.
    pub base_url: String,
    /// Whole-request budget, in seconds.
    pub request_timeout_secs: u64,
    /// Default fade duration for power transitions, in milliseconds.
    pub transition_ms: u64,
}

impl Default for LifxConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: "https://api.lifx.com/v1".to_string(),
            request_timeout_secs: 10,
            transition_ms: 1000,
        }
    }
}
