//! ZipCode (CEP) value object.

use super::errors::{ValidationError, ValidationResult};
use super::input::{impl_input_from, Normalize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a Brazilian zip code.
pub const ZIP_CODE_LENGTH: usize = 8;

/// A Brazilian zip code, stored as its 8 bare digits.
///
/// Any non-digit characters in the input are discarded, so `"01310-200"`,
/// `"01.310-200"` and `"01310200"` are the same zip code.
///
/// # Example
///
/// ```
/// use correios_models::domain::ZipCode;
///
/// let zip = ZipCode::new("01310-200").unwrap();
/// assert_eq!(zip.code(), "01310200");
/// assert_eq!(zip.display(), "01310-200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode from raw text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZipCode` unless exactly 8 digits remain
    /// after stripping everything else.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        Self::sanitize(raw).map(Self)
    }

    fn sanitize(raw: &str) -> ValidationResult<String> {
        let code: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if code.len() != ZIP_CODE_LENGTH {
            tracing::debug!(raw = %raw, "Rejected zip code");
            return Err(ValidationError::InvalidZipCode(raw.to_string()));
        }

        Ok(code)
    }

    /// The 8 bare digits.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Format as `NNNNN-NNN`.
    pub fn display(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl FromStr for ZipCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Normalize for ZipCode {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        Self::new(raw)
    }
}

impl_input_from!(ZipCode);

impl PartialEq<str> for ZipCode {
    fn eq(&self, other: &str) -> bool {
        Self::sanitize(other).is_ok_and(|code| code == self.0)
    }
}

impl PartialEq<&str> for ZipCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

// Serde support - serialize as the bare digits
impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
