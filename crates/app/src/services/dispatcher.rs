//! Trigger dispatcher — fires the one-shot action that should change a
//! target's power state, without waiting for the effect.

use wakehub_domain::error::WakehubError;
use wakehub_domain::power::PowerState;
use wakehub_domain::target::Target;

use crate::ports::{RemoteRunner, WakeSender};

/// Default UDP port for wake packets (discard port).
pub const DEFAULT_WAKE_PORT: u16 = 9;

/// Dispatches wake packets and suspend commands.
///
/// Transient transmission and command failures reduce to `Ok(false)` with
/// the reason logged — the dispatcher's feedback is not authoritative and
/// the poller proceeds either way. Only configuration gaps (missing MAC,
/// missing credentials) propagate as errors.
pub struct TriggerDispatcher<W, R> {
    wake: W,
    remote: R,
    wake_port: u16,
}

impl<W: WakeSender, R: RemoteRunner> TriggerDispatcher<W, R> {
    /// Create a dispatcher over the given wake and remote ports.
    pub fn new(wake: W, remote: R) -> Self {
        Self {
            wake,
            remote,
            wake_port: DEFAULT_WAKE_PORT,
        }
    }

    /// Override the wake packet destination port.
    #[must_use]
    pub fn with_wake_port(mut self, port: u16) -> Self {
        self.wake_port = port;
        self
    }

    /// Route to [`send_wake`](Self::send_wake) or
    /// [`send_suspend`](Self::send_suspend) based on the expected end state.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors only.
    pub async fn dispatch(
        &self,
        target: &Target,
        expected: PowerState,
    ) -> Result<bool, WakehubError> {
        match expected {
            PowerState::Online => self.send_wake(target).await,
            PowerState::Offline => self.send_suspend(target).await,
        }
    }

    /// Emit one wake packet to the target's address, plus a secondary
    /// emission to the subnet broadcast address when one is configured
    /// (some network topologies only deliver broadcast-directed packets).
    ///
    /// Returns whether at least one emission left the local socket.
    ///
    /// # Errors
    ///
    /// Returns [`WakehubError::Validation`] when the target has no MAC
    /// address configured.
    #[tracing::instrument(skip(self, target), fields(target = %target.name))]
    pub async fn send_wake(&self, target: &Target) -> Result<bool, WakehubError> {
        let mac = target.require_mac()?;

        let mut delivered = false;
        match self.wake.send(mac, &target.host, self.wake_port).await {
            Ok(()) => {
                tracing::info!(%mac, host = %target.host, "wake packet sent");
                delivered = true;
            }
            Err(err) => {
                tracing::warn!(%mac, host = %target.host, error = %err, "wake packet failed");
            }
        }

        if let Some(broadcast) = target.broadcast {
            match self.wake.send(mac, &broadcast.to_string(), self.wake_port).await {
                Ok(()) => {
                    tracing::info!(%mac, %broadcast, "broadcast wake packet sent");
                    delivered = true;
                }
                Err(err) => {
                    tracing::warn!(%mac, %broadcast, error = %err, "broadcast wake packet failed");
                }
            }
        }

        Ok(delivered)
    }

    /// Run the target's privileged suspend command over one authenticated
    /// session. Does not wait for the target to actually go offline — that
    /// is the convergence poller's job.
    ///
    /// Returns whether the command was dispatched and exited cleanly. The
    /// failure reason (connect, exec, exit status) is logged, never acted on.
    ///
    /// # Errors
    ///
    /// Returns [`WakehubError::Validation`] when the target has no remote
    /// credentials configured.
    #[tracing::instrument(skip(self, target), fields(target = %target.name))]
    pub async fn send_suspend(&self, target: &Target) -> Result<bool, WakehubError> {
        target.require_credentials()?;

        match self.remote.run(target, &target.suspend_command).await {
            Ok(()) => {
                tracing::info!(command = %target.suspend_command, "suspend command dispatched");
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(
                    command = %target.suspend_command,
                    error = %err,
                    "suspend command failed"
                );
                Ok(false)
            }
        }
    }
}
