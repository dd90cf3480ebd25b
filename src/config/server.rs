//! HTTP listener configuration.

use serde::Deserialize;
use std::{net::SocketAddr, time::Duration};

use super::{ConfigError, duration};

const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Listener settings for the API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:8080" (default: 0.0.0.0:8080).
    #[serde(default = "default_address")]
    pub address: String,
    /// Upper bound on a single request (default: 10s).
    #[serde(default = "default_request_timeout", with = "duration")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Parse `address` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "server.address is not a valid socket address: {}",
                self.address
            ))
        })
    }
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}
