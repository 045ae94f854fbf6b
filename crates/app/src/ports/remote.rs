//! Remote command port — one privileged command over an authenticated session.

use std::future::Future;

use wakehub_domain::target::Target;

/// How a remote command invocation failed.
///
/// The variants are distinguishable for logging, but callers in the use-case
/// layer reduce all of them to one boolean — the reason never drives control
/// flow.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The authenticated session could not be established.
    #[error("session could not be established: {0}")]
    Connect(String),

    /// The session came up but the command could not be started.
    #[error("command could not be executed: {0}")]
    Exec(String),

    /// The command ran and exited non-zero.
    #[error("command exited with status {status}")]
    ExitStatus { status: i32 },
}

/// Runs fire-and-forget privileged commands on targets.
///
/// Implementations must close the session on every exit path and must not
/// wait for any effect the command has on the target's power state.
pub trait RemoteRunner: Send + Sync {
    /// Open a session to `target`, run `command` once, close the session.
    fn run(
        &self,
        target: &Target,
        command: &str,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send;
}
