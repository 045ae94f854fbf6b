//! Reachability probe strategies.
//!
//! Each strategy performs one bounded-latency attempt and never touches the
//! target beyond the check itself. The prober iterates them in priority
//! order; [`default_stack`] encodes that order.

use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::process::Command;

use wakehub_app::ports::ProbeStrategy;
use wakehub_domain::target::{DEFAULT_REMOTE_PORT, Target};

/// Timing configuration shared by all strategies.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-strategy attempt budget, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_secs: 3 }
    }
}

impl ProbeConfig {
    fn timeout(self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// The ordered default strategy stack: ping, TCP connect, SSH handshake.
#[must_use]
pub fn default_stack(config: ProbeConfig) -> Vec<NetProbe> {
    vec![
        NetProbe::Ping(config),
        NetProbe::Tcp(config),
        NetProbe::Ssh(config),
    ]
}

/// One network probe strategy.
#[derive(Debug, Clone, Copy)]
pub enum NetProbe {
    /// One ICMP echo via the system `ping` binary.
    Ping(ProbeConfig),
    /// TCP connect to the target's configured probe port.
    Tcp(ProbeConfig),
    /// TCP connect to the remote shell port and read the `SSH-` banner.
    Ssh(ProbeConfig),
}

impl ProbeStrategy for NetProbe {
    fn name(&self) -> &'static str {
        match self {
            Self::Ping(_) => "ping",
            Self::Tcp(_) => "tcp-connect",
            Self::Ssh(_) => "ssh-handshake",
        }
    }

    async fn probe(&self, target: &Target) -> std::io::Result<bool> {
        match self {
            Self::Ping(config) => ping(target, config.timeout()).await,
            Self::Tcp(config) => tcp_connect(target, config.timeout()).await,
            Self::Ssh(config) => ssh_handshake(target, config.timeout()).await,
        }
    }
}

/// One echo request; a non-zero exit (host down, unresolvable) is a negative.
async fn ping(target: &Target, timeout: Duration) -> std::io::Result<bool> {
    let status = Command::new("ping")
        .arg("-c")
        .arg("1")
        .arg("-W")
        .arg(timeout.as_secs().to_string())
        .arg(&target.host)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;
    Ok(status.success())
}

/// Connect to the configured probe port. Targets without one skip this
/// strategy (negative, so the next strategy still gets its turn).
async fn tcp_connect(target: &Target, timeout: Duration) -> std::io::Result<bool> {
    let Some(port) = target.probe_port else {
        return Ok(false);
    };
    match tokio::time::timeout(timeout, TcpStream::connect((target.host.as_str(), port))).await {
        Ok(Ok(_stream)) => Ok(true),
        Ok(Err(err)) => Err(err),
        Err(_elapsed) => Ok(false),
    }
}

/// Connect to the remote shell port and check for the SSH identification
/// banner. Confirms the host is not just up but accepting sessions.
async fn ssh_handshake(target: &Target, timeout: Duration) -> std::io::Result<bool> {
    let port = target
        .credentials
        .as_ref()
        .map_or(DEFAULT_REMOTE_PORT, |credentials| credentials.port);

    let attempt = async {
        let mut stream = TcpStream::connect((target.host.as_str(), port)).await?;
        let mut banner = [0u8; 4];
        stream.read_exact(&mut banner).await?;
        Ok::<bool, std::io::Error>(&banner == b"SSH-")
    };

    match tokio::time::timeout(timeout, attempt).await {
        Ok(result) => result,
        Err(_elapsed) => Ok(false),
    }
}
