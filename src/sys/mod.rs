//! System information reported to clients.
//!
//! The values are fixed once the configuration is loaded; each call hands out
//! a fresh snapshot.

use serde::{Deserialize, Serialize};

use crate::config::DatartConfig;

/// Snapshot of the system configuration visible to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: String,
    /// Token timeout in minutes, passed through as configured.
    pub token_timeout: String,
    #[serde(alias = "mailEnable")]
    pub mail_enabled: bool,
}

/// Read-only accessor for the system info snapshot.
#[derive(Debug, Clone)]
pub struct SystemInfoProvider {
    version: String,
    token_timeout: String,
    mail_enabled: bool,
}

impl SystemInfoProvider {
    pub fn new(config: &DatartConfig) -> Self {
        Self {
            version: config.version.clone(),
            token_timeout: config.token_timeout.clone(),
            mail_enabled: config.send_mail,
        }
    }

    pub fn get_system_info(&self) -> SystemInfo {
        SystemInfo {
            version: self.version.clone(),
            token_timeout: self.token_timeout.clone(),
            mail_enabled: self.mail_enabled,
        }
    }
}
