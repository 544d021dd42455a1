//! Configuration management for the Correios models.
//!
//! This module loads the few runtime settings the models need from
//! environment variables, reading a `.env` file first if one is present.

use crate::domain::{Phone, ValidationResult, DEFAULT_REGION};
use crate::error::{ConfigError, ConfigResult};
use crate::models::{Service, DEFAULT_SYMBOL_EXTENSION};
use phonenumber::country::Id as Region;
use std::env;
use std::path::PathBuf;

/// Default directory holding service symbol images.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding service symbol images (default: "data")
    pub data_dir: PathBuf,

    /// Region used to parse phone numbers without a `+` prefix (default: BR)
    pub phone_region: Region,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CORREIOS_DATA_DIR`: Symbol image directory (default: "data")
    /// - `CORREIOS_PHONE_REGION`: Two-letter phone region (default: "BR")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_dir = env::var("CORREIOS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let phone_region = match env::var("CORREIOS_PHONE_REGION") {
            Ok(val) => Self::parse_region(&val)?,
            Err(_) => DEFAULT_REGION,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            data_dir,
            phone_region,
            log_level,
        })
    }

    /// Parse a phone number against the configured region.
    pub fn phone(&self, raw: &str) -> ValidationResult<Phone> {
        Phone::with_region(raw, self.phone_region)
    }

    /// Location of a service's symbol image under the data directory.
    pub fn symbol_path(&self, service: &Service) -> PathBuf {
        service.symbol_path(&self.data_dir, DEFAULT_SYMBOL_EXTENSION)
    }

    /// Parse a two-letter region code such as `BR` or `pt`.
    fn parse_region(val: &str) -> ConfigResult<Region> {
        val.trim()
            .to_uppercase()
            .parse::<Region>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "CORREIOS_PHONE_REGION".to_string(),
                reason: format!("Unknown phone region, got: {}", val),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            phone_region: DEFAULT_REGION,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
