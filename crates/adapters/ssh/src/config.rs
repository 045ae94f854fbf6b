//! SSH client configuration.

use serde::Deserialize;

/// Configuration for the system ssh client invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    /// TCP connect budget handed to the client, in seconds.
    pub connect_timeout_secs: u64,
    /// Client binary to spawn.
    pub binary: String,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            binary: "ssh".to_string(),
        }
    }
}
