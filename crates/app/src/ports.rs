//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod lighting;
pub mod probe;
pub mod remote;
pub mod wake;

pub use lighting::{LightingClient, LightingError};
pub use probe::ProbeStrategy;
pub use remote::{RemoteError, RemoteRunner};
pub use wake::WakeSender;
