use gobarber_domain::{GoBarberError, LogFormat, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Resolve the filter: `RUST_LOG` first, then the configured directive,
/// then `info`.
///
/// # Errors
/// Returns `GoBarberError::Config` when the configured directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = config.filter.as_deref().unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directive)
        .map_err(|e| GoBarberError::Config(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `GoBarberError::Config` for an invalid filter and
/// `GoBarberError::Internal` when a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| GoBarberError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
