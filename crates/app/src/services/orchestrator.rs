//! Bundle orchestrator — runs a convergence attempt and a lighting call
//! concurrently and reports both outcomes verbatim.

use std::time::Duration;

use wakehub_domain::convergence::{ConvergenceRequest, ConvergenceResult};
use wakehub_domain::error::WakehubError;
use wakehub_domain::lighting::{LightPower, LightSelector, LightingResult};
use wakehub_domain::power::PowerState;
use wakehub_domain::target::Target;

use crate::ports::{LightingClient, ProbeStrategy, RemoteRunner, WakeSender};
use crate::services::poller::ConvergencePoller;

/// Aggregate of one bundle invocation.
///
/// The two halves are independent and independently truthful: the caller
/// interprets the pair, no derived "overall success" is computed here.
#[derive(Debug)]
pub struct BundleOutcome {
    /// The wake/sleep convergence outcome (or a configuration error).
    pub device: Result<ConvergenceResult, WakehubError>,
    /// The lighting call outcome.
    pub lights: LightingResult,
}

/// Runs the device-state and lighting halves of an arrive/leave bundle in
/// parallel; neither half's failure prevents the other from completing or
/// being reported.
pub struct BundleOrchestrator<S, W, R, L> {
    poller: ConvergencePoller<S, W, R>,
    lighting: L,
}

impl<S, W, R, L> BundleOrchestrator<S, W, R, L>
where
    S: ProbeStrategy,
    W: WakeSender,
    R: RemoteRunner,
    L: LightingClient,
{
    /// Create an orchestrator over the given poller and lighting client.
    pub fn new(poller: ConvergencePoller<S, W, R>, lighting: L) -> Self {
        Self { poller, lighting }
    }

    /// Arrive: wake the target and turn the lights on, concurrently.
    pub async fn arrive(
        &self,
        target: &Target,
        request: ConvergenceRequest,
        selector: LightSelector,
        transition: Duration,
    ) -> BundleOutcome {
        debug_assert_eq!(request.expected, PowerState::Online);
        self.run(target, request, selector, LightPower::On, transition)
            .await
    }

    /// Leave: suspend the target and turn the lights off, concurrently.
    pub async fn leave(
        &self,
        target: &Target,
        request: ConvergenceRequest,
        selector: LightSelector,
        transition: Duration,
    ) -> BundleOutcome {
        debug_assert_eq!(request.expected, PowerState::Offline);
        self.run(target, request, selector, LightPower::Off, transition)
            .await
    }

    /// Run only the device half — the single-action wake/sleep endpoints.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the poller.
    pub async fn converge(
        &self,
        target: &Target,
        request: ConvergenceRequest,
    ) -> Result<ConvergenceResult, WakehubError> {
        self.poller.run(target, request).await
    }

    /// Run one convergence attempt and one lighting call side by side.
    #[tracing::instrument(skip(self, target, request), fields(target = %target.name, %selector, %power))]
    pub async fn run(
        &self,
        target: &Target,
        request: ConvergenceRequest,
        selector: LightSelector,
        power: LightPower,
        transition: Duration,
    ) -> BundleOutcome {
        let (device, lights) = tokio::join!(
            self.poller.run(target, request),
            self.set_lights(selector, power, transition),
        );
        BundleOutcome { device, lights }
    }

    /// Apply `power` to the selected lights, falling back to all known
    /// lights (once, without retry) when a group selector matches nothing.
    #[tracing::instrument(skip(self), fields(%selector, %power))]
    pub async fn set_lights(
        &self,
        selector: LightSelector,
        power: LightPower,
        transition: Duration,
    ) -> LightingResult {
        let statuses = match self.lighting.set_power(&selector, power, transition).await {
            Ok(statuses) => statuses,
            Err(err) => {
                tracing::warn!(error = %err, "lighting call failed");
                return LightingResult::failed(err.to_string());
            }
        };

        if statuses.is_empty() && selector != LightSelector::All {
            tracing::info!("selector matched no lights, falling back to all");
            return match self
                .lighting
                .set_power(&LightSelector::All, power, transition)
                .await
            {
                Ok(statuses) => LightingResult::from_statuses(statuses),
                Err(err) => {
                    tracing::warn!(error = %err, "fallback lighting call failed");
                    LightingResult::failed(err.to_string())
                }
            };
        }

        LightingResult::from_statuses(statuses)
    }
}
