//! State (federative unit) value object.

use super::errors::{ValidationError, ValidationResult};
use super::input::{impl_input_from, Normalize};
use crate::data::STATES;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Length of a state code.
pub const STATE_LENGTH: usize = 2;

/// Lower-cased state name to state code, built once from [`STATES`].
static NAME_TO_CODE: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    STATES
        .iter()
        .map(|(code, name)| (name.to_lowercase(), *code))
        .collect()
});

/// One of the 27 Brazilian federative units, stored as its 2-letter code.
///
/// Accepts either the code (`"sp"`, `"SP"`) or the full Portuguese name
/// (`"São Paulo"`, `"são paulo"`).
///
/// # Example
///
/// ```
/// use correios_models::domain::State;
///
/// let state = State::new("rio grande do sul").unwrap();
/// assert_eq!(state.code(), "RS");
/// assert_eq!(state.display(), "Rio Grande do Sul");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    code: &'static str,
    name: &'static str,
}

impl State {
    /// Create a new State from a code or a name. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` if the input resolves to no
    /// known state.
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let raw = raw.trim();
        let resolved = match NAME_TO_CODE.get(&raw.to_lowercase()) {
            Some(code) => (*code).to_string(),
            None => raw.to_uppercase(),
        };

        if resolved.chars().count() != STATE_LENGTH {
            tracing::debug!(raw = %raw, "Rejected state");
            return Err(ValidationError::InvalidState(resolved));
        }

        STATES
            .iter()
            .find(|(code, _)| *code == resolved)
            .map(|&(code, name)| Self { code, name })
            .ok_or_else(|| {
                tracing::debug!(raw = %raw, "Rejected state");
                ValidationError::InvalidState(resolved)
            })
    }

    /// All 27 states, in table order.
    pub fn all() -> impl Iterator<Item = State> {
        STATES.iter().map(|&(code, name)| Self { code, name })
    }

    /// The 2-letter code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full Portuguese name.
    pub fn display(&self) -> &'static str {
        self.name
    }
}

impl FromStr for State {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Normalize for State {
    fn normalize(raw: &str) -> ValidationResult<Self> {
        Self::new(raw)
    }
}

impl_input_from!(State);

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        Self::new(other).is_ok_and(|state| state.code == self.code)
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for State {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        State::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
