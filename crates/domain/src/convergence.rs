//! Convergence — the contract between callers and the wake/sleep poller.
//!
//! A request names the expected end state plus the loop's timing knobs; a
//! result reports whether the observed state matched before the deadline.
//!
//! Invariant: `converged == true` implies the final observed state equals
//! the requested expected state. `converged == false` only means the
//! deadline was reached first — the last sample may still coincidentally
//! match, so callers must not infer a mismatch from it.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::power::PowerState;

/// Default pause between reachability samples.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default deadline for a convergence attempt.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(45);

/// One convergence invocation: expected end state plus timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergenceRequest {
    /// The state the target should end up in.
    pub expected: PowerState,
    /// Pause between reachability samples.
    pub interval: Duration,
    /// Wall-clock budget, measured from the trigger dispatch.
    pub deadline: Duration,
}

impl ConvergenceRequest {
    /// A request with default timing.
    #[must_use]
    pub fn new(expected: PowerState) -> Self {
        Self {
            expected,
            interval: DEFAULT_POLL_INTERVAL,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Override the poll interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Outcome of one convergence invocation.
///
/// Serializes to the wire shape
/// `{"converged": …, "elapsedMs": …, "attempts": …, "observedOnline": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConvergenceResult {
    /// Did the observed state match the expected state before the deadline?
    pub converged: bool,
    /// Wall-clock time from trigger dispatch to the terminal sample.
    #[serde(rename = "elapsedMs", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    /// Number of poll samples taken (the initial pre-check is not counted).
    pub attempts: u32,
    /// The last observed state.
    #[serde(rename = "observedOnline", serialize_with = "serialize_online")]
    pub observed: PowerState,
}

impl ConvergenceResult {
    /// The target was already in the expected state: no trigger, no polling.
    #[must_use]
    pub fn already_in_state(observed: PowerState) -> Self {
        Self {
            converged: true,
            elapsed: Duration::ZERO,
            attempts: 0,
            observed,
        }
    }

    /// The observed state matched within the deadline.
    #[must_use]
    pub fn converged(elapsed: Duration, attempts: u32, observed: PowerState) -> Self {
        Self {
            converged: true,
            elapsed,
            attempts,
            observed,
        }
    }

    /// The deadline elapsed first; `observed` is whatever was last sampled.
    #[must_use]
    pub fn timed_out(elapsed: Duration, attempts: u32, observed: PowerState) -> Self {
        Self {
            converged: false,
            elapsed,
            attempts,
            observed,
        }
    }

    /// Elapsed time in whole milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

fn serialize_online<S: Serializer>(observed: &PowerState, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(observed.is_online())
}
