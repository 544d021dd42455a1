//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the single-field concepts of
//! the postal domain: zip codes, states, phone numbers, tax numbers and
//! tracking codes. Each value object validates and normalizes its input at
//! construction time, so an invalid value can never be represented.

pub mod errors;
pub mod input;
pub mod phone;
pub mod state;
pub mod tax_number;
pub mod tracking_code;
pub mod zip_code;

pub use errors::{ValidationError, ValidationResult};
pub use input::{Input, Normalize};
pub use phone::{Phone, DEFAULT_REGION};
pub use state::State;
pub use tax_number::{cnpj_check_digits, FederalTaxNumber, StateTaxNumber, TaxNumber};
pub use tracking_code::{tracking_check_digit, TrackingCode};
pub use zip_code::ZipCode;
