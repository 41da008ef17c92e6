//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `GOBARBER_API_BASE_URL` is missing, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `GOBARBER_API_BASE_URL`: API base URL (required)
//! - `GOBARBER_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `GOBARBER_API_MAX_ATTEMPTS`: Attempts per request (1 = no retry)
//! - `GOBARBER_TIMEZONE`: IANA timezone for "today" and hour bucketing
//! - `GOBARBER_LOCALE`: `pt-BR` or `en-US`
//! - `GOBARBER_LOG_FORMAT`: `pretty` or `json`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./gobarber.{json,toml}` or `./config.{json,toml}`
//! 2. The same names in the parent and grandparent directories
//! 3. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use gobarber_domain::{
    ApiConfig, Config, DashboardConfig, GoBarberError, Locale, LogFormat, LoggingConfig, Result,
};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["gobarber.json", "gobarber.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the base URL is
/// not set there, falls back to loading from a config file. The result is
/// validated either way.
///
/// # Errors
/// Returns `GoBarberError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails [`validate`]
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `GOBARBER_API_BASE_URL` is required; every other field falls back
/// to its default.
///
/// # Errors
/// Returns `GoBarberError::Config` if the base URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let base_url = env_var("GOBARBER_API_BASE_URL")?;
    let timeout_seconds =
        env_parse("GOBARBER_API_TIMEOUT_SECS", "timeout", defaults.api.timeout_seconds)?;
    let max_attempts =
        env_parse("GOBARBER_API_MAX_ATTEMPTS", "max attempts", defaults.api.max_attempts)?;

    let timezone = std::env::var("GOBARBER_TIMEZONE").unwrap_or(defaults.dashboard.timezone);
    let locale = env_parse::<Locale>("GOBARBER_LOCALE", "locale", defaults.dashboard.locale)?;
    let format = env_parse::<LogFormat>("GOBARBER_LOG_FORMAT", "log format", defaults.logging.format)?;

    Ok(Config {
        api: ApiConfig { base_url, timeout_seconds, max_attempts },
        dashboard: DashboardConfig { timezone, locale },
        logging: LoggingConfig { format, filter: defaults.logging.filter },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GoBarberError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GoBarberError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GoBarberError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GoBarberError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Check values serde cannot.
///
/// # Errors
/// Returns `GoBarberError::Config` naming the first offending field.
pub fn validate(config: &Config) -> Result<()> {
    let url = Url::parse(&config.api.base_url).map_err(|e| {
        GoBarberError::Config(format!("Invalid api.base_url '{}': {}", config.api.base_url, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(GoBarberError::Config(format!(
            "api.base_url must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.api.timeout_seconds == 0 {
        return Err(GoBarberError::Config("api.timeout_seconds must be greater than 0".into()));
    }
    if config.api.max_attempts == 0 {
        return Err(GoBarberError::Config("api.max_attempts must be at least 1".into()));
    }

    config.dashboard.timezone.parse::<Tz>().map_err(|e| {
        GoBarberError::Config(format!(
            "Invalid dashboard.timezone '{}': {}",
            config.dashboard.timezone, e
        ))
    })?;

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GoBarberError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GoBarberError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(GoBarberError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and up to two parents, then the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `GoBarberError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        GoBarberError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, falling back to `default`.
fn env_parse<T>(key: &str, what: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| GoBarberError::Config(format!("Invalid {} in {}: {}", what, key, e))),
        Err(_) => Ok(default),
    }
}
