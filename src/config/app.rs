//! Logging settings under the `app` key.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is unset: "trace", "debug", "info", "warn", "error".
    pub log_level: Option<String>,
}
