//! Configuration structures
//!
//! Every field has a default so partial JSON/TOML files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_TIMEZONE,
};
use crate::impl_label_conversions;
use crate::types::Locale;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// Remote scheduling API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g. "http://localhost:3333")
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Total attempts per request (1 = no retry)
    pub max_attempts: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
        }
    }
}

/// Presentation settings for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// IANA timezone name used for "today" and hour bucketing
    pub timezone: String,
    pub locale: Locale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_TIMEZONE.to_string(), locale: Locale::default() }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl_label_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    pub filter: Option<String>,
}
