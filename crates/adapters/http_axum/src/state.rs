//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use wakehub_app::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};
use wakehub_app::services::directory::TargetDirectory;
use wakehub_app::services::orchestrator::BundleOrchestrator;
use wakehub_domain::convergence::{DEFAULT_DEADLINE, DEFAULT_POLL_INTERVAL};
use wakehub_domain::lighting::DEFAULT_TRANSITION;

/// Per-request timing defaults, applied when the request body omits them.
#[derive(Debug, Clone, Copy)]
pub struct TimingDefaults {
    /// Poll interval for convergence attempts.
    pub interval: Duration,
    /// Convergence deadline.
    pub deadline: Duration,
    /// Lighting fade duration.
    pub transition: Duration,
}

impl Default for TimingDefaults {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            deadline: DEFAULT_DEADLINE,
            transition: DEFAULT_TRANSITION,
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the port implementations to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do
/// not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, W, R, L> {
    /// Configured targets, keyed by name.
    pub directory: Arc<TargetDirectory>,
    /// The poller + lighting orchestrator.
    pub orchestrator: Arc<BundleOrchestrator<S, W, R, L>>,
    /// Timing defaults for requests that omit them.
    pub defaults: TimingDefaults,
}

impl<S, W, R, L> Clone for AppState<S, W, R, L> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            orchestrator: Arc::clone(&self.orchestrator),
            defaults: self.defaults,
        }
    }
}

impl<S, W, R, L> AppState<S, W, R, L>
where
    S: ProbeStrategy + 'static,
    W: WakeSender + 'static,
    R: RemoteRunner + 'static,
    L: LightingClient + 'static,
{
    /// Create a new application state.
    pub fn new(
        directory: TargetDirectory,
        orchestrator: BundleOrchestrator<S, W, R, L>,
        defaults: TimingDefaults,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            orchestrator: Arc::new(orchestrator),
            defaults,
        }
    }
}
