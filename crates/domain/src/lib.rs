//! # wakehub-domain
//!
//! Pure domain model for the wakehub automation daemon.
//!
//! ## Responsibilities
//! - Foundational types: MAC addresses, error conventions
//! - Define **Targets** (wake/sleep-able machines known from configuration)
//! - Define **Power states** and **probe outcomes** (observed reachability)
//! - Define **Convergence** requests and results (the poller's contract)
//! - Define **Lighting** selectors and results (the vendor-call contract)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod convergence;
pub mod error;
pub mod lighting;
pub mod mac;
pub mod power;
pub mod target;
