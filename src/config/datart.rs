//! Settings under the `datart` key.

use serde::{Deserialize, Deserializer, de};
use serde_yaml::Value;

const DEFAULT_TOKEN_TIMEOUT_MIN: &str = "30";

/// Resolved datart settings exposed through the system info endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatartConfig {
    /// Application version (`datart.version`).
    pub version: String,
    /// Token timeout in minutes, as written in the configuration.
    pub token_timeout: String,
    /// Whether activation mail is sent to newly registered users.
    pub send_mail: bool,
}

/// The `datart` section as written in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatartSection {
    /// Required; checked when the section is resolved.
    pub version: Option<String>,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub user: UserConfig,
}

impl DatartSection {
    /// Resolve into `DatartConfig`, or `None` if `version` is absent.
    pub fn resolve(self) -> Option<DatartConfig> {
        Some(DatartConfig {
            version: self.version?,
            token_timeout: self.security.token.timeout_min,
            send_mail: self.user.active.send_mail,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub token: TokenConfig,
}

/// Session token settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TokenConfig {
    /// Token timeout in minutes (default: "30").
    ///
    /// Kept as text. Any YAML scalar is accepted; a null value becomes the
    /// empty string.
    #[serde(default = "default_timeout_min", deserialize_with = "scalar_string")]
    pub timeout_min: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            timeout_min: default_timeout_min(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub active: ActiveConfig,
}

/// User activation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActiveConfig {
    #[serde(default)]
    pub send_mail: bool,
}

fn default_timeout_min() -> String {
    DEFAULT_TOKEN_TIMEOUT_MIN.to_string()
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => u.to_string(),
            (None, Some(i), _) => i.to_string(),
            // Debug keeps the decimal point: 30.0 stays "30.0".
            (None, None, Some(f)) => format!("{f:?}"),
            (None, None, None) => n.to_string(),
        }),
        _ => Err(de::Error::custom("expected a scalar value")),
    }
}
