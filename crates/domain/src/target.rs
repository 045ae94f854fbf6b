//! Target — a wake/sleep-able machine known from configuration.
//!
//! Targets are immutable after configuration load and owned by the service
//! process for its lifetime; nothing about them is persisted or mutated at
//! runtime.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::mac::MacAddr;

/// Default privileged command used to suspend a target.
pub const DEFAULT_SUSPEND_COMMAND: &str = "sudo systemctl suspend";

/// Default remote shell port.
pub const DEFAULT_REMOTE_PORT: u16 = 22;

/// A machine the daemon can wake, suspend, and probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Stable name used in webhook paths and configuration.
    pub name: String,
    /// Hostname or IP address used for probing and remote sessions.
    pub host: String,
    /// Hardware address for wake packets, if wake is supported.
    #[serde(default)]
    pub mac: Option<MacAddr>,
    /// Subnet broadcast address for the secondary wake emission, if the
    /// network only delivers broadcast-directed packets.
    #[serde(default)]
    pub broadcast: Option<Ipv4Addr>,
    /// TCP port used by the port-connect probe strategy, if any.
    #[serde(default)]
    pub probe_port: Option<u16>,
    /// Remote shell credentials, if suspend is supported.
    #[serde(default)]
    pub credentials: Option<RemoteCredentials>,
    /// Privileged command executed to suspend the target.
    #[serde(default = "default_suspend_command")]
    pub suspend_command: String,
}

/// Credentials for the authenticated remote session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCredentials {
    /// Remote user name.
    pub user: String,
    /// Path to the private key, if not the client default.
    #[serde(default)]
    pub identity_file: Option<String>,
    /// Remote shell port.
    #[serde(default = "default_remote_port")]
    pub port: u16,
}

fn default_suspend_command() -> String {
    DEFAULT_SUSPEND_COMMAND.to_string()
}

fn default_remote_port() -> u16 {
    DEFAULT_REMOTE_PORT
}

impl Target {
    /// Start building a target.
    #[must_use]
    pub fn builder() -> TargetBuilder {
        TargetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::EmptyHost`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.host.trim().is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        Ok(())
    }

    /// The MAC address, required for wake dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMac`] when none is configured.
    pub fn require_mac(&self) -> Result<MacAddr, ValidationError> {
        self.mac.ok_or_else(|| ValidationError::MissingMac {
            target: self.name.clone(),
        })
    }

    /// The remote credentials, required for suspend dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] when none are configured.
    pub fn require_credentials(&self) -> Result<&RemoteCredentials, ValidationError> {
        self.credentials
            .as_ref()
            .ok_or_else(|| ValidationError::MissingCredentials {
                target: self.name.clone(),
            })
    }
}

/// Builder for [`Target`].
#[derive(Debug, Default)]
pub struct TargetBuilder {
    name: String,
    host: String,
    mac: Option<MacAddr>,
    broadcast: Option<Ipv4Addr>,
    probe_port: Option<u16>,
    credentials: Option<RemoteCredentials>,
    suspend_command: Option<String>,
}

impl TargetBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn mac(mut self, mac: MacAddr) -> Self {
        self.mac = Some(mac);
        self
    }

    #[must_use]
    pub fn broadcast(mut self, broadcast: Ipv4Addr) -> Self {
        self.broadcast = Some(broadcast);
        self
    }

    #[must_use]
    pub fn probe_port(mut self, port: u16) -> Self {
        self.probe_port = Some(port);
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: RemoteCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn suspend_command(mut self, command: impl Into<String>) -> Self {
        self.suspend_command = Some(command.into());
        self
    }

    /// Finish building, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name or host is empty.
    pub fn build(self) -> Result<Target, ValidationError> {
        let target = Target {
            name: self.name,
            host: self.host,
            mac: self.mac,
            broadcast: self.broadcast,
            probe_port: self.probe_port,
            credentials: self.credentials,
            suspend_command: self.suspend_command.unwrap_or_else(default_suspend_command),
        };
        target.validate()?;
        Ok(target)
    }
}
