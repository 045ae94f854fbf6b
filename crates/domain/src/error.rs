//! Common error types used across the workspace.
//!
//! Two classes matter at the domain level: configuration gaps on a target
//! (validation) and lookups that match nothing (not found). Transient
//! network and command failures are deliberately *not* errors here — the
//! application layer absorbs them into boolean observations.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum WakehubError {
    /// A target or request violates a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A named target or group matched nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Target name is empty.
    #[error("target name must not be empty")]
    EmptyName,

    /// Target host is empty.
    #[error("target host must not be empty")]
    EmptyHost,

    /// A MAC address string could not be parsed.
    #[error("invalid MAC address: {input}")]
    InvalidMac { input: String },

    /// A wake was requested for a target with no hardware address.
    #[error("target {target} has no MAC address configured")]
    MissingMac { target: String },

    /// A suspend was requested for a target with no remote credentials.
    #[error("target {target} has no remote credentials configured")]
    MissingCredentials { target: String },
}

/// A lookup by name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {name}")]
pub struct NotFoundError {
    /// What kind of thing was looked up (`"Target"`, `"Group"`, …).
    pub kind: &'static str,
    /// The name that matched nothing.
    pub name: String,
}
