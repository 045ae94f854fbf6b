//! Convergence poller — the wake/sleep verification state machine.
//!
//! `Idle → Triggered → Polling → {Converged | TimedOut}`. One immediate
//! pre-check, one trigger dispatch, then fixed-interval sampling until the
//! observed state matches the expectation or the deadline elapses. Both
//! terminal states are non-error outcomes; only configuration errors from
//! the dispatcher propagate.

use tokio::time::Instant;

use wakehub_domain::convergence::{ConvergenceRequest, ConvergenceResult};
use wakehub_domain::error::WakehubError;
use wakehub_domain::target::Target;

use crate::ports::{ProbeStrategy, RemoteRunner, WakeSender};
use crate::services::dispatcher::TriggerDispatcher;
use crate::services::prober::ReachabilityProber;

/// Runs one convergence attempt: trigger once, then sample until the target
/// reaches the expected state or the deadline passes.
pub struct ConvergencePoller<S, W, R> {
    prober: ReachabilityProber<S>,
    dispatcher: TriggerDispatcher<W, R>,
}

impl<S, W, R> ConvergencePoller<S, W, R>
where
    S: ProbeStrategy,
    W: WakeSender,
    R: RemoteRunner,
{
    /// Create a poller over the given prober and dispatcher.
    pub fn new(prober: ReachabilityProber<S>, dispatcher: TriggerDispatcher<W, R>) -> Self {
        Self { prober, dispatcher }
    }

    /// Drive `target` toward `request.expected`.
    ///
    /// The pre-check handles the common case where the target is already in
    /// the desired state: no trigger is sent and the result reports zero
    /// elapsed time and zero attempts. Otherwise the trigger is dispatched
    /// exactly once; a lost packet or failed command does not abort polling,
    /// since the device may still transition (or already be mid-transition).
    ///
    /// Elapsed time is measured from the trigger dispatch; the attempt count
    /// increments once per poll sample (the pre-check is not counted).
    ///
    /// # Errors
    ///
    /// Returns [`WakehubError::Validation`] when the target lacks the
    /// configuration the trigger needs (MAC address or credentials).
    /// Timeouts are **not** errors — they come back as `converged: false`.
    #[tracing::instrument(skip(self, target, request), fields(target = %target.name, expected = %request.expected))]
    pub async fn run(
        &self,
        target: &Target,
        request: ConvergenceRequest,
    ) -> Result<ConvergenceResult, WakehubError> {
        let initial = self.prober.probe(target).await;
        if initial.state() == request.expected {
            tracing::info!("target already in expected state, skipping trigger");
            return Ok(ConvergenceResult::already_in_state(initial.state()));
        }

        if self.dispatcher.dispatch(target, request.expected).await? {
            tracing::debug!("trigger dispatched");
        } else {
            tracing::warn!("trigger dispatch failed, polling regardless");
        }

        let triggered_at = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            tokio::time::sleep(request.interval).await;
            attempts += 1;

            let sample = self.prober.probe(target).await;
            let observed = sample.state();
            let elapsed = triggered_at.elapsed();

            if observed == request.expected {
                tracing::info!(attempts, elapsed = ?elapsed, "target converged");
                return Ok(ConvergenceResult::converged(elapsed, attempts, observed));
            }
            if elapsed >= request.deadline {
                tracing::warn!(attempts, elapsed = ?elapsed, %observed, "deadline reached before convergence");
                return Ok(ConvergenceResult::timed_out(elapsed, attempts, observed));
            }
        }
    }
}
