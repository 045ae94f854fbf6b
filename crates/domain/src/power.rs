//! Power state — the binary reachability state a target converges toward.

use serde::{Deserialize, Serialize};

/// Expected or observed power state of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    Online,
    Offline,
}

impl PowerState {
    /// Map a raw reachability observation to a state.
    #[must_use]
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable { Self::Online } else { Self::Offline }
    }

    /// Whether this state means the target answers probes.
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::Offline => f.write_str("offline"),
        }
    }
}

/// Result of a single liveness check.
///
/// The strategy name is diagnostic only; decision logic never branches on it
/// beyond first-success-wins inside the prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Did any strategy affirmatively reach the target?
    pub reachable: bool,
    /// Name of the strategy that produced the positive, if any.
    pub strategy: Option<&'static str>,
}

impl ProbeOutcome {
    /// A positive observation produced by the named strategy.
    #[must_use]
    pub fn positive(strategy: &'static str) -> Self {
        Self {
            reachable: true,
            strategy: Some(strategy),
        }
    }

    /// A negative observation (no strategy succeeded).
    #[must_use]
    pub fn negative() -> Self {
        Self {
            reachable: false,
            strategy: None,
        }
    }

    /// The power state this observation implies.
    #[must_use]
    pub fn state(self) -> PowerState {
        PowerState::from_reachable(self.reachable)
    }
}
