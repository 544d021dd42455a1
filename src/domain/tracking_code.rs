//! TrackingCode value object.

use super::errors::{ValidationError, ValidationResult};
use super::input::{impl_input_from, Normalize};
use crate::data::tracking_prefix_description;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static TRACKING_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{2})([0-9]{8})([0-9])([A-Z]{2})$")
        .expect("Failed to compile tracking code regex")
});

const DIGIT_WEIGHTS: [u32; 8] = [8, 6, 4, 2, 3, 5, 9, 7];

/// Compute the check digit of an 8-digit tracking serial number.
pub fn tracking_check_digit(number: u32) -> u8 {
    let digits = format!("{:08}", number);
    let sum: u32 = digits
        .bytes()
        .zip(DIGIT_WEIGHTS)
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum();

    match sum % 11 {
        0 => 5,
        1 => 0,
        r => (11 - r) as u8,
    }
}

/// An object tracking code such as `SX123456785BR`.
///
/// Layout: two-letter prefix, 8-digit serial number, check digit, two-letter
/// suffix (usually the country, `BR`).
///
/// # Example
///
/// ```
/// use correios_models::domain::TrackingCode;
///
/// let code = TrackingCode::new("dl 474 911 376 br").unwrap();
/// assert_eq!(code.code(), "DL474911376BR");
/// assert_eq!(code.display(), "DL 474 911 376 BR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Parse a tracking code, ignoring whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTrackingCode` if the layout is wrong or
    /// the check digit does not match.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        Self::sanitize(raw).map(Self)
    }

    /// Build a tracking code from its parts, computing the check digit.
    pub fn from_parts(prefix: &str, number: u32, suffix: &str) -> ValidationResult<Self> {
        if number > 99_999_999 {
            return Err(ValidationError::InvalidTrackingCode(format!(
                "{}{}{}",
                prefix, number, suffix
            )));
        }

        Self::new(&format!(
            "{}{:08}{}{}",
            prefix,
            number,
            tracking_check_digit(number),
            suffix
        ))
    }

    fn sanitize(raw: &str) -> ValidationResult<String> {
        let code: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        let captures = TRACKING_CODE_REGEX.captures(&code).ok_or_else(|| {
            tracing::debug!(raw = %raw, "Rejected tracking code layout");
            ValidationError::InvalidTrackingCode(raw.to_string())
        })?;

        let number: u32 = captures[2]
            .parse()
            .map_err(|_| ValidationError::InvalidTrackingCode(raw.to_string()))?;
        let digit = captures[3].as_bytes()[0] - b'0';

        if tracking_check_digit(number) != digit {
            tracing::debug!(raw = %raw, "Rejected tracking code check digit");
            return Err(ValidationError::InvalidTrackingCode(raw.to_string()));
        }

        Ok(code)
    }

    /// The compact code.
    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }

    /// The 8-digit serial number.
    pub fn number(&self) -> u32 {
        self.0[2..10].parse().unwrap_or_default()
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[10] - b'0'
    }

    pub fn suffix(&self) -> &str {
        &self.0[11..]
    }

    /// What kind of object the prefix marks, when the prefix is known.
    pub fn prefix_description(&self) -> Option<&'static str> {
        tracking_prefix_description(self.prefix())
    }

    /// Spaced format, e.g. `SX 123 456 785 BR`.
    pub fn display(&self) -> String {
        let c = &self.0;
        format!(
            "{} {} {} {} {}",
            &c[..2],
            &c[2..5],
            &c[5..8],
            &c[8..11],
            &c[11..]
        )
    }
}

impl FromStr for TrackingCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Normalize for TrackingCode {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        Self::new(raw)
    }
}

impl_input_from!(TrackingCode);

impl PartialEq<str> for TrackingCode {
    fn eq(&self, other: &str) -> bool {
        Self::sanitize(other).is_ok_and(|code| code == self.0)
    }
}

impl PartialEq<&str> for TrackingCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for TrackingCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrackingCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TrackingCode::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
