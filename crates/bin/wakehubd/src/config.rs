//! Configuration loading. TOML file with environment variable overrides.
//!
//! Looks for `wakehub.toml` in the working directory. Every field except the
//! target list has a sensible default, so a minimal file only declares
//! `[[targets]]` entries. Environment variables take precedence over file
//! values.

use serde::Deserialize;

use wakehub_adapter_lifx::LifxConfig;
use wakehub_adapter_net::ProbeConfig;
use wakehub_adapter_ssh::SshConfig;
use wakehub_app::services::dispatcher::DEFAULT_WAKE_PORT;
use wakehub_domain::target::Target;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Probe timing settings.
    pub probe: ProbeConfig,
    /// Wake packet settings.
    pub wake: WakeConfig,
    /// Remote shell client settings.
    pub ssh: SshConfig,
    /// Lighting vendor settings.
    pub lifx: LifxConfig,
    /// Machines the daemon manages.
    pub targets: Vec<Target>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Wake packet emission configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WakeConfig {
    /// UDP destination port for magic packets.
    pub port: u16,
}

impl Config {
    /// Load configuration from `wakehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// configured value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wakehub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("WAKEHUB_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("WAKEHUB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("WAKEHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("WAKEHUB_LIFX_TOKEN") {
            self.lifx.token = val;
        }
        // Generic first, product-specific last: WAKEHUB_LOG beats RUST_LOG.
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("WAKEHUB_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        for target in &self.targets {
            target.validate().map_err(|err| {
                ConfigError::Validation(format!("target '{}': {err}", target.name))
            })?;
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wakehubd=info,wakehub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_WAKE_PORT,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.wake.port, 9);
        assert_eq!(config.probe.timeout_secs, 3);
        assert!(config.targets.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = r#"
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [probe]
            timeout_secs = 2

            [wake]
            port = 7

            [ssh]
            connect_timeout_secs = 3

            [lifx]
            token = 'secret'
            transition_ms = 2000

            [[targets]]
            name = 'office'
            host = '192.168.1.20'
            mac = 'AA:BB:CC:DD:EE:FF'
            broadcast = '192.168.1.255'
            probe_port = 22
            credentials = { user = 'admin' }

            [[targets]]
            name = 'nas'
            host = '192.168.1.30'
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.probe.timeout_secs, 2);
        assert_eq!(config.wake.port, 7);
        assert_eq!(config.ssh.connect_timeout_secs, 3);
        assert_eq!(config.lifx.token, "secret");
        assert_eq!(config.lifx.transition_ms, 2000);
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].name, "office");
        assert_eq!(
            config.targets[0].mac.unwrap().to_string(),
            "AA:BB:CC:DD:EE:FF"
        );
        assert_eq!(
            config.targets[0].credentials.as_ref().unwrap().user,
            "admin"
        );
        assert_eq!(config.targets[0].credentials.as_ref().unwrap().port, 22);
        assert!(config.targets[1].mac.is_none());
    }

    #[test]
    fn should_apply_default_suspend_command_to_parsed_targets() {
        let toml = "
            [[targets]]
            name = 'office'
            host = '192.168.1.20'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.targets[0].suspend_command, "sudo systemctl suspend");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_target_with_blank_host() {
        let toml = "
            [[targets]]
            name = 'office'
            host = '  '
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_malformed_mac_in_target() {
        let toml = "
            [[targets]]
            name = 'office'
            host = '192.168.1.20'
            mac = 'not-a-mac'
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_overrides_to_server_and_token() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            "WAKEHUB_BIND" => Some("127.0.0.1:9090".to_string()),
            "WAKEHUB_LIFX_TOKEN" => Some("secret".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.lifx.token, "secret");
    }

    #[test]
    fn should_prefer_product_log_override_over_generic() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            "WAKEHUB_LOG" => Some("wakehubd=debug".to_string()),
            "RUST_LOG" => Some("info".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "wakehubd=debug");
    }

    #[test]
    fn should_fall_back_to_generic_log_override() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "RUST_LOG").then(|| "info".to_string()));
        assert_eq!(config.logging.filter, "info");
    }
}
