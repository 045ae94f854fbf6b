//! Probe port — one concrete method of testing target reachability.

use std::future::Future;

use wakehub_domain::target::Target;

/// One reachability probing strategy (ping, port-connect, session handshake).
///
/// A strategy performs a **single** attempt with bounded latency and no side
/// effects on the target. An `Err` is diagnostic only — the prober treats it
/// exactly like `Ok(false)` and never propagates it.
pub trait ProbeStrategy: Send + Sync {
    /// Short name used in logs and [`ProbeOutcome`](wakehub_domain::power::ProbeOutcome).
    fn name(&self) -> &'static str;

    /// Check whether `target` currently answers this strategy.
    fn probe(&self, target: &Target) -> impl Future<Output = std::io::Result<bool>> + Send;
}
