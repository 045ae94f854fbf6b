//! Reachability prober — reduces an ordered strategy list to one observation.

use wakehub_domain::power::ProbeOutcome;
use wakehub_domain::target::Target;

use crate::ports::ProbeStrategy;

/// Issues a single liveness check using an ordered list of strategies.
///
/// Strategies are tried in priority order; the first affirmative success
/// short-circuits the rest, since a positive from any one strategy is
/// sufficient evidence of reachability. A strategy error counts as a
/// negative — false negatives are what the *next* strategy is for.
pub struct ReachabilityProber<S> {
    strategies: Vec<S>,
}

impl<S: ProbeStrategy> ReachabilityProber<S> {
    /// Create a prober over the given strategies, in priority order.
    pub fn new(strategies: Vec<S>) -> Self {
        Self { strategies }
    }

    /// Check whether `target` is currently reachable.
    #[tracing::instrument(skip(self, target), fields(target = %target.name))]
    pub async fn probe(&self, target: &Target) -> ProbeOutcome {
        for strategy in &self.strategies {
            match strategy.probe(target).await {
                Ok(true) => {
                    tracing::debug!(strategy = strategy.name(), "probe positive");
                    return ProbeOutcome::positive(strategy.name());
                }
                Ok(false) => {
                    tracing::trace!(strategy = strategy.name(), "probe negative");
                }
                Err(err) => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        error = %err,
                        "probe strategy errored, counting as negative"
                    );
                }
            }
        }
        ProbeOutcome::negative()
    }
}
