//! Raw-or-validated constructor arguments.
//!
//! Constructors across the crate accept either an already validated value or
//! the raw text it should be built from. [`Input`] tags the two cases and
//! [`Input::resolve`] is the single place where raw text gets normalized.

use super::errors::{ValidationError, ValidationResult};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;

/// Types that can be built from raw, untrusted text.
pub trait Normalize: Sized {
    /// Validate and normalize `raw` into `Self`.
    fn normalize(raw: &str) -> ValidationResult<Self>;
}

/// Either a validated value or raw text still to be validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a, T> {
    Value(T),
    Raw(Cow<'a, str>),
}

impl<T: Normalize> Input<'_, T> {
    /// Return the value, normalizing raw text first.
    ///
    /// Raw text is trimmed before it reaches [`Normalize::normalize`].
    pub fn resolve(self) -> ValidationResult<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Raw(raw) => T::normalize(raw.trim()),
        }
    }
}

/// Implements the `From` conversions that feed [`Input`] for a concrete type.
macro_rules! impl_input_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<$ty> for $crate::domain::Input<'a, $ty> {
                fn from(value: $ty) -> Self {
                    $crate::domain::Input::Value(value)
                }
            }

            impl<'a> From<&'a str> for $crate::domain::Input<'a, $ty> {
                fn from(raw: &'a str) -> Self {
                    $crate::domain::Input::Raw(::std::borrow::Cow::Borrowed(raw))
                }
            }

            impl<'a> From<&'a String> for $crate::domain::Input<'a, $ty> {
                fn from(raw: &'a String) -> Self {
                    $crate::domain::Input::Raw(::std::borrow::Cow::Borrowed(raw.as_str()))
                }
            }

            impl<'a> From<String> for $crate::domain::Input<'a, $ty> {
                fn from(raw: String) -> Self {
                    $crate::domain::Input::Raw(::std::borrow::Cow::Owned(raw))
                }
            }
        )*
    };
}

pub(crate) use impl_input_from;

impl_input_from!(u32, u64, Decimal, DateTime<FixedOffset>);

impl Normalize for u32 {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        u32::from_str(raw).map_err(|_| ValidationError::InvalidNumber(raw.to_string()))
    }
}

impl Normalize for u64 {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        u64::from_str(raw).map_err(|_| ValidationError::InvalidNumber(raw.to_string()))
    }
}

impl Normalize for Decimal {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        Decimal::from_str(raw).map_err(|_| ValidationError::InvalidCoordinate(raw.to_string()))
    }
}

/// Accepted timestamp layouts, tried in order.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

impl Normalize for DateTime<FixedOffset> {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
    }
}
