//! # wakehub-adapter-ssh
//!
//! `RemoteRunner` implementation backed by the system `ssh` client.
//!
//! One session per call: the child process is spawned, awaited to
//! completion, and reaped on every path, so the session never outlives the
//! invocation. `BatchMode=yes` keeps the client from ever prompting — a
//! missing or rejected key fails fast instead of hanging the daemon.
//!
//! Exit status 255 is the ssh client's own error convention (connection,
//! authentication, configuration); anything else is the remote command's
//! status.

mod config;

use std::process::Stdio;

use tokio::process::Command;

use wakehub_app::ports::{RemoteError, RemoteRunner};
use wakehub_domain::target::{RemoteCredentials, Target};

pub use config::SshConfig;

/// Runs one privileged command per authenticated session.
#[derive(Debug, Clone)]
pub struct SshRemoteRunner {
    config: SshConfig,
}

impl SshRemoteRunner {
    /// Create a runner with the given client configuration.
    #[must_use]
    pub fn new(config: SshConfig) -> Self {
        Self { config }
    }

    /// Build the argument vector for one invocation.
    fn build_args(&self, target: &Target, credentials: &RemoteCredentials, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.config.connect_timeout_secs),
            "-o".to_string(),
            "StrictHostKeyChecking=accept-new".to_string(),
            "-p".to_string(),
            credentials.port.to_string(),
        ];
        if let Some(identity_file) = &credentials.identity_file {
            args.push("-i".to_string());
            args.push(identity_file.clone());
        }
        args.push(format!("{}@{}", credentials.user, target.host));
        args.push(command.to_string());
        args
    }
}

impl RemoteRunner for SshRemoteRunner {
    async fn run(&self, target: &Target, command: &str) -> Result<(), RemoteError> {
        let credentials = target
            .require_credentials()
            .map_err(|err| RemoteError::Connect(err.to_string()))?;
        let args = self.build_args(target, credentials, command);

        tracing::debug!(target = %target.name, command, "spawning remote session");
        let output = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| RemoteError::Exec(err.to_string()))?;

        classify_exit(output.status.code(), &output.stderr)
    }
}

/// Map an ssh exit to the port's failure taxonomy.
fn classify_exit(code: Option<i32>, stderr: &[u8]) -> Result<(), RemoteError> {
    match code {
        Some(0) => Ok(()),
        Some(255) => Err(RemoteError::Connect(stderr_snippet(stderr))),
        Some(status) => Err(RemoteError::ExitStatus { status }),
        None => Err(RemoteError::Exec("terminated by signal".to_string())),
    }
}

fn stderr_snippet(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "ssh exited with status 255".to_string()
    } else {
        trimmed.lines().next().unwrap_or(trimmed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> SshRemoteRunner {
        SshRemoteRunner::new(SshConfig::default())
    }

    fn target(identity_file: Option<&str>, port: u16) -> Target {
        Target::builder()
            .name("office")
            .host("192.168.1.20")
            .credentials(RemoteCredentials {
                user: "admin".to_string(),
                identity_file: identity_file.map(ToString::to_string),
                port,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_batch_mode_args() {
        let target = target(None, 22);
        let credentials = target.require_credentials().unwrap();
        let args = runner().build_args(&target, credentials, "sudo systemctl suspend");

        assert_eq!(
            args,
            [
                "-o",
                "BatchMode=yes",
                "-o",
                "ConnectTimeout=5",
                "-o",
                "StrictHostKeyChecking=accept-new",
                "-p",
                "22",
                "admin@192.168.1.20",
                "sudo systemctl suspend",
            ]
        );
    }

    #[test]
    fn should_include_identity_file_and_custom_port() {
        let target = target(Some("/home/admin/.ssh/id_ed25519"), 2222);
        let credentials = target.require_credentials().unwrap();
        let args = runner().build_args(&target, credentials, "poweroff");

        assert!(args.windows(2).any(|pair| {
            pair == ["-i", "/home/admin/.ssh/id_ed25519"]
        }));
        assert!(args.windows(2).any(|pair| pair == ["-p", "2222"]));
    }

    #[test]
    fn should_classify_zero_exit_as_success() {
        assert!(classify_exit(Some(0), b"").is_ok());
    }

    #[test]
    fn should_classify_255_as_connection_failure() {
        let result = classify_exit(Some(255), b"ssh: connect to host 192.168.1.20 port 22: Connection refused\n");
        match result {
            Err(RemoteError::Connect(reason)) => {
                assert!(reason.contains("Connection refused"));
            }
            other => panic!("expected Connect error, got {other:?}"),
        }
    }

    #[test]
    fn should_classify_other_exit_as_command_status() {
        let result = classify_exit(Some(1), b"");
        assert!(matches!(result, Err(RemoteError::ExitStatus { status: 1 })));
    }

    #[test]
    fn should_classify_signal_termination_as_exec_failure() {
        let result = classify_exit(None, b"");
        assert!(matches!(result, Err(RemoteError::Exec(_))));
    }

    #[tokio::test]
    async fn should_report_exec_failure_when_binary_is_missing() {
        let runner = SshRemoteRunner::new(SshConfig {
            binary: "wakehub-no-such-ssh-binary".to_string(),
            ..SshConfig::default()
        });

        let result = runner.run(&target(None, 22), "true").await;
        assert!(matches!(result, Err(RemoteError::Exec(_))));
    }

    #[tokio::test]
    async fn should_report_connect_failure_without_credentials() {
        let no_credentials = Target::builder()
            .name("nas")
            .host("192.168.1.30")
            .build()
            .unwrap();

        let result = runner().run(&no_credentials, "true").await;
        assert!(matches!(result, Err(RemoteError::Connect(_))));
    }
}
