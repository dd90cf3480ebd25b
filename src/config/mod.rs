//! Configuration loading and validation for the system info service.
//!
//! Uses serde_yaml to load a YAML configuration file, then applies
//! environment variable overrides for the `datart.*` keys.

mod app;
mod datart;
mod duration;
mod error;
mod server;

pub use datart::DatartConfig;
pub use error::ConfigError;

use app::AppConfig;
use datart::DatartSection;
use server::ServerConfig;
use serde::Deserialize;
use std::{env, fs, net::SocketAddr};

pub const ENV_VERSION: &str = "DATART_VERSION";
pub const ENV_TOKEN_TIMEOUT_MIN: &str = "DATART_SECURITY_TOKEN_TIMEOUT_MIN";
pub const ENV_SEND_MAIL: &str = "DATART_USER_ACTIVE_SEND_MAIL";
pub const ENV_SERVER_ADDRESS: &str = "DATART_SERVER_ADDRESS";

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logging settings.
    pub app: AppConfig,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Parsed `server.address`.
    pub socket: SocketAddr,
    /// Values reported by `GET /sys/info`.
    pub datart: DatartConfig,
}

/// Configuration file layout.
///
/// Only `datart.version` is required; every other section falls back to defaults.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    app: AppConfig,
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    datart: DatartSection,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present), then the YAML file, then overrides:
    /// - `DATART_VERSION`
    /// - `DATART_SECURITY_TOKEN_TIMEOUT_MIN`
    /// - `DATART_USER_ACTIVE_SEND_MAIL`
    /// - `DATART_SERVER_ADDRESS`
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content, |key| env::var(key).ok())
    }

    /// Parse YAML content and apply overrides resolved through `lookup`.
    pub(crate) fn from_yaml<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file: ConfigFile = serde_yaml::from_str(content)?;

        file.apply_overrides(lookup)?;
        file.validate()
    }
}

impl ConfigFile {
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(version) = lookup(ENV_VERSION) {
            self.datart.version = Some(version);
        }

        if let Some(timeout) = lookup(ENV_TOKEN_TIMEOUT_MIN) {
            self.datart.security.token.timeout_min = timeout;
        }

        if let Some(value) = lookup(ENV_SEND_MAIL) {
            self.datart.user.active.send_mail = parse_bool(&value).ok_or(
                ConfigError::InvalidOverride {
                    key: ENV_SEND_MAIL,
                    value,
                },
            )?;
        }

        if let Some(address) = lookup(ENV_SERVER_ADDRESS) {
            self.server.address = address;
        }

        Ok(())
    }

    fn validate(self) -> Result<Config, ConfigError> {
        let datart = self.datart.resolve().ok_or_else(|| {
            ConfigError::Validation(format!(
                "datart.version is required (set it in the config file or via {})",
                ENV_VERSION
            ))
        })?;

        let socket = self.server.socket_addr()?;

        Ok(Config {
            app: self.app,
            server: self.server,
            socket,
            datart,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
