//! Structured logging setup.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` when set and valid, otherwise the
/// configured log level.
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install a global fmt subscriber writing to stderr.
///
/// # Errors
///
/// Returns `ConfigError::Other` if a global subscriber is already installed.
pub fn init_logging(config: &Config) -> ConfigResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(log_level = %config.log_level, "Logging initialized");
    Ok(())
}
