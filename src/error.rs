//! Error types for the Correios models.
//!
//! Field-level validation errors live in [`crate::domain::errors`]; this
//! module holds catalog lookup, model construction and configuration errors,
//! defined with `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by catalog lookups and catalog entry constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Unknown postal service
    #[error("Unknown service {0}")]
    InvalidService(String),

    /// Unknown or malformed extra service
    #[error("Invalid extra service: {0}")]
    InvalidExtraService(String),

    /// Unknown or malformed regional direction
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
}

/// Errors raised while building composed models (contracts, posting cards,
/// users, services).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A catalog reference could not be resolved
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
