//! Phone value object.

use super::errors::{ValidationError, ValidationResult};
use super::input::{impl_input_from, Normalize};
use phonenumber::country::Id as Region;
use phonenumber::{Mode, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Region used when a number carries no `+` country prefix.
pub const DEFAULT_REGION: Region = Region::BR;

/// A parsed phone number.
///
/// Numbers starting with `+` are parsed with the country code they carry;
/// anything else is parsed as a national number of the given region. Two
/// phones are equal when they have the same E.164 form, however they were
/// written.
///
/// # Example
///
/// ```
/// use correios_models::domain::Phone;
///
/// let phone = Phone::new("(11) 3030-3030").unwrap();
/// assert_eq!(phone.to_string(), "551130303030");
/// assert_eq!(phone, "+55 11 3030-3030");
/// ```
#[derive(Debug, Clone)]
pub struct Phone {
    parsed: PhoneNumber,
    region: Region,
    number: String,
}

impl Phone {
    /// Parse a phone number in the default region (Brazil).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number cannot be parsed.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        Self::with_region(raw, DEFAULT_REGION)
    }

    /// Parse a phone number, using `region` when it has no `+` prefix.
    pub fn with_region(raw: &str, region: Region) -> ValidationResult<Self> {
        Ok(Self {
            parsed: Self::parse(raw, region)?,
            region,
            number: raw.chars().filter(|c| c.is_ascii_digit()).collect(),
        })
    }

    fn parse(raw: &str, region: Region) -> ValidationResult<PhoneNumber> {
        let hint = if raw.starts_with('+') {
            None
        } else {
            Some(region)
        };

        phonenumber::parse(hint, raw).map_err(|e| {
            tracing::debug!(raw = %raw, error = %e, "Rejected phone number");
            ValidationError::InvalidPhone(raw.to_string())
        })
    }

    /// The digits of the input as given, without formatting.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Region the number was parsed against.
    pub fn region(&self) -> Region {
        self.region
    }

    /// International calling code (55 for Brazil).
    pub fn country_code(&self) -> u16 {
        self.parsed.code().value()
    }

    /// National significant number, without country code.
    pub fn national_number(&self) -> u64 {
        self.parsed.national().value()
    }

    /// International format, e.g. `+55 11 3030-3030`.
    pub fn display(&self) -> String {
        self.parsed.format().mode(Mode::International).to_string()
    }

    /// E.164 format, e.g. `+551130303030`.
    pub fn e164(&self) -> String {
        self.parsed.format().mode(Mode::E164).to_string()
    }
}

// Compared in E.164 form: the parsed value also records whether the country
// code came from a `+` prefix or the region.
impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.e164() == other.e164()
    }
}

impl Eq for Phone {}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        Self::parse(other, self.region)
            .is_ok_and(|parsed| parsed.format().mode(Mode::E164).to_string() == self.e164())
    }
}

impl PartialEq<&str> for Phone {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Normalize for Phone {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        Self::new(raw)
    }
}

impl_input_from!(Phone);

// Serde support - serialize as E.164 so the country is never lost
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.e164().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code(), self.national_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_national_number() {
        let phone = Phone::new("(41) 3232-3232").unwrap();
        assert_eq!(phone.country_code(), 55);
        assert_eq!(phone.national_number(), 4132323232);
        assert_eq!(phone.number(), "4132323232");
        assert_eq!(phone.to_string(), "554132323232");
    }

    #[test]
    fn test_phone_with_country_prefix_ignores_region() {
        let phone = Phone::with_region("+1 650-253-0000", Region::BR).unwrap();
        assert_eq!(phone.country_code(), 1);
        assert_eq!(phone.national_number(), 6502530000);
    }

    #[test]
    fn test_phone_explicit_region() {
        let phone = Phone::with_region("650-253-0000", Region::US).unwrap();
        assert_eq!(phone.country_code(), 1);
        assert_eq!(phone.region(), Region::US);
    }

    #[test]
    fn test_phone_equality_by_parsed_value() {
        let a = Phone::new("(41) 3232-3232").unwrap();
        let b = Phone::new("+55 41 3232 3232").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "41 32323232");
        assert_ne!(a, "41 32323233");
    }

    #[test]
    fn test_phone_invalid() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("not a phone").is_err());
    }

    #[test]
    fn test_phone_display_international() {
        let phone = Phone::new("11 98765-4321").unwrap();
        assert!(phone.display().starts_with("+55 11"));
    }

    #[test]
    fn test_phone_serde() {
        let phone = Phone::new("(41) 3232-3232").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+554132323232\"");
        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }
}
