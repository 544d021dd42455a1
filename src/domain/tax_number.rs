//! Tax identifiers: federal (CNPJ) and state (inscrição estadual).

use super::errors::{ValidationError, ValidationResult};
use super::input::{impl_input_from, Normalize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a CNPJ, check digits included.
pub const FEDERAL_TAX_NUMBER_SIZE: usize = 14;

const FIRST_DIGIT_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_DIGIT_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Behaviour shared by tax identifiers.
pub trait TaxNumber {
    /// The bare digits.
    fn number(&self) -> &str;

    /// Human-readable representation.
    fn display(&self) -> String;
}

fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();

    match sum % 11 {
        r if r > 1 => (11 - r) as u8,
        _ => 0,
    }
}

/// Compute the two CNPJ check digits for the 12 leading digits.
///
/// # Example
///
/// ```
/// use correios_models::domain::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
/// ```
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_DIGIT_WEIGHTS);

    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    let second = check_digit(&extended, &SECOND_DIGIT_WEIGHTS);

    [first, second]
}

/// A Brazilian company tax number (CNPJ), check digits verified.
///
/// # Example
///
/// ```
/// use correios_models::domain::{FederalTaxNumber, TaxNumber};
///
/// let cnpj = FederalTaxNumber::new("11.222.333/0001-81").unwrap();
/// assert_eq!(cnpj.number(), "11222333000181");
/// assert_eq!(cnpj.display(), "11.222.333/0001-81");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FederalTaxNumber(String);

impl FederalTaxNumber {
    /// Create a new FederalTaxNumber from raw text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFederalTaxNumber` if the input does
    /// not hold exactly 14 digits or the check digits do not match.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let number = sanitize(raw);

        if number.len() != FEDERAL_TAX_NUMBER_SIZE {
            tracing::debug!(raw = %raw, "Rejected federal tax number size");
            return Err(ValidationError::InvalidFederalTaxNumber(format!(
                "Tax Number must have {} digits",
                FEDERAL_TAX_NUMBER_SIZE
            )));
        }

        let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        let mut base = [0u8; 12];
        base.copy_from_slice(&digits[..12]);

        if cnpj_check_digits(&base)[..] != digits[12..] {
            tracing::debug!(raw = %raw, "Rejected federal tax number check digits");
            return Err(ValidationError::InvalidFederalTaxNumber(
                "Invalid Federal Tax Number verification digits".to_string(),
            ));
        }

        Ok(Self(number))
    }
}

impl TaxNumber for FederalTaxNumber {
    fn number(&self) -> &str {
        &self.0
    }

    fn display(&self) -> String {
        let n = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &n[..2],
            &n[2..5],
            &n[5..8],
            &n[8..12],
            &n[12..]
        )
    }
}

/// A state tax number. Only the digits are kept; there is no checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StateTaxNumber(String);

impl StateTaxNumber {
    pub fn new(raw: &str) -> Self {
        Self(sanitize(raw))
    }
}

impl TaxNumber for StateTaxNumber {
    fn number(&self) -> &str {
        &self.0
    }

    fn display(&self) -> String {
        self.0.clone()
    }
}

/// Equality against raw text, serde and conversions common to both numbers.
macro_rules! tax_number_impls {
    ($ty:ident, $build:expr) => {
        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $build(s)
            }
        }

        impl Normalize for $ty {
            fn normalize(raw: &str) -> ValidationResult<Self> {
                $build(raw)
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == sanitize(other)
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self == *other
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $build(&s).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl_input_from!($ty);
    };
}

tax_number_impls!(FederalTaxNumber, FederalTaxNumber::new);
tax_number_impls!(StateTaxNumber, |raw: &str| -> ValidationResult<StateTaxNumber> {
    Ok(StateTaxNumber::new(raw))
});
