//! # wakehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProbeStrategy` — one way of testing target reachability
//!   - `WakeSender` — emit one magic packet
//!   - `RemoteRunner` — run one privileged command over an authenticated session
//!   - `LightingClient` — set power for a light selector
//! - Provide the **use-case services**:
//!   - `ReachabilityProber` — reduce an ordered strategy list to one boolean
//!   - `TriggerDispatcher` — fire the one-shot wake/suspend action
//!   - `ConvergencePoller` — trigger, then sample until converged or deadline
//!   - `BundleOrchestrator` — poller + lighting call, concurrently, independent
//!   - `TargetDirectory` — named lookup of configured targets
//! - Orchestrate domain objects without knowing *how* network IO works
//!
//! ## Dependency rule
//! Depends on `wakehub-domain` only (plus `tokio::time` for the poll loop).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
