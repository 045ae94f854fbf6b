//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod directory;
pub mod dispatcher;
pub mod orchestrator;
pub mod poller;
pub mod prober;
