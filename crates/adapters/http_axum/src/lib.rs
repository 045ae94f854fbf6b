//! # wakehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the webhook endpoints (`/api/targets/{name}/wake`, `…/sleep`,
//!   `/api/lights/on|off`, `/api/bundles/arrive|leave`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map convergence outcomes into the three response shapes callers rely
//!   on: converged (200), trigger sent but not verified (202), and
//!   not found (404) — a timeout is never collapsed into a generic error
//!
//! ## Dependency rule
//! Depends on `wakehub-app` (for port traits and services) and
//! `wakehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
