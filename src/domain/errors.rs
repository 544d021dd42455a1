//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Every variant carries the offending input (or a short reason) so callers
/// can report it back and re-supply corrected data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The zip code does not reduce to exactly 8 digits.
    #[error("Invalid zip code: {0}")]
    InvalidZipCode(String),

    /// The state is neither a known code nor a known name.
    #[error("State code {0} is invalid")]
    InvalidState(String),

    /// The phone number could not be parsed.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The federal tax number (CNPJ) has the wrong size or check digits.
    #[error("Invalid federal tax number: {0}")]
    InvalidFederalTaxNumber(String),

    /// The tracking code is malformed or its check digit does not match.
    #[error("Invalid tracking code: {0}")]
    InvalidTrackingCode(String),

    /// Latitude or longitude is not a decimal number or is out of range.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A date could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A numeric field could not be parsed.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
