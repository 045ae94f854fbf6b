//! # wakehub-adapter-net
//!
//! Network adapter implementing the wake and probe ports with plain sockets
//! and the system `ping` binary.
//!
//! ## Provided implementations
//!
//! | Type | Port | Method |
//! |------|------|--------|
//! | [`UdpWakeSender`] | `WakeSender` | UDP magic packet |
//! | [`NetProbe::Ping`] | `ProbeStrategy` | one `ping -c 1` invocation |
//! | [`NetProbe::Tcp`] | `ProbeStrategy` | TCP connect to the target's probe port |
//! | [`NetProbe::Ssh`] | `ProbeStrategy` | TCP connect + SSH banner read |
//!
//! ## Dependency rule
//!
//! Depends on `wakehub-app` (port traits) and `wakehub-domain` only.

mod probe;
mod wol;

pub use probe::{NetProbe, ProbeConfig, default_stack};
pub use wol::UdpWakeSender;
