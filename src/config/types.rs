use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoint serving the full country list.
pub const DEFAULT_ENDPOINT: &str = "https://countryapi.io/api/all";

/// Environment variable holding the API key when none is set in the file.
pub const DEFAULT_API_KEY_ENV: &str = "COUNTRY_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Country API access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// URL fetched once at startup.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Literal API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Diagnostic logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "country_browser=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the user cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            api_key_env: default_api_key_env(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
