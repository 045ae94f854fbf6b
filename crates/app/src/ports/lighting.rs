//! Lighting port — set power state through the vendor's API.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use wakehub_domain::lighting::{LightPower, LightSelector};

/// Failures of the vendor call as a whole.
///
/// Per-light failures are *not* errors — they come back as `false` entries
/// in the status map.
#[derive(Debug, thiserror::Error)]
pub enum LightingError {
    /// The request never reached the vendor (DNS, connect, timeout).
    #[error("vendor request failed: {0}")]
    Transport(String),

    /// The vendor answered with a non-success status.
    #[error("vendor rejected the request with status {0}")]
    Status(u16),
}

/// Controls lights through the vendor's HTTP API.
pub trait LightingClient: Send + Sync {
    /// Set the power state for every light matched by `selector`, fading
    /// over `transition`.
    ///
    /// Returns a success flag per matched light label. A selector matching
    /// nothing yields an empty map, not an error.
    fn set_power(
        &self,
        selector: &LightSelector,
        power: LightPower,
        transition: Duration,
    ) -> impl Future<Output = Result<BTreeMap<String, bool>, LightingError>> + Send;
}
