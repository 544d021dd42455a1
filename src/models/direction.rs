//! Regional directions.

use crate::data::DIRECTIONS;
use crate::error::{CatalogError, CatalogResult};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

static DIRECTION_LIST: Lazy<Vec<Direction>> = Lazy::new(|| {
    DIRECTIONS
        .iter()
        .map(|record| Direction {
            number: record.number,
            code: record.code.to_string(),
            name: record.name.to_string(),
        })
        .collect()
});

/// A regional direction: the administrative unit a contract is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Direction {
    number: u32,
    code: String,
    name: String,
}

/// What [`Direction::get`] accepts: a resolved entry, its number or its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionKey<'a> {
    Resolved(&'a Direction),
    Number(u32),
    Code(&'a str),
}

impl<'a> From<&'a Direction> for DirectionKey<'a> {
    fn from(direction: &'a Direction) -> Self {
        Self::Resolved(direction)
    }
}

impl From<u32> for DirectionKey<'_> {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

/// Numeric text is taken as a direction number, anything else as a code.
impl<'a> From<&'a str> for DirectionKey<'a> {
    fn from(raw: &'a str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Code(raw.trim()),
        }
    }
}

impl fmt::Display for DirectionKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(direction) => write!(f, "{}", direction.number),
            Self::Number(number) => write!(f, "{}", number),
            Self::Code(code) => write!(f, "{:?}", code),
        }
    }
}

impl Direction {
    /// Create a new direction.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDirection` for a zero number or an empty
    /// code or name.
    pub fn new(number: u32, code: &str, name: &str) -> CatalogResult<Self> {
        if number == 0 {
            return Err(CatalogError::InvalidDirection(format!(
                "Invalid direction number {}",
                number
            )));
        }

        if code.is_empty() {
            return Err(CatalogError::InvalidDirection(format!(
                "Invalid direction code {:?}",
                code
            )));
        }

        if name.is_empty() {
            return Err(CatalogError::InvalidDirection(format!(
                "Invalid direction name {:?}",
                name
            )));
        }

        Ok(Self {
            number,
            code: code.to_uppercase(),
            name: name.to_string(),
        })
    }

    /// Look up a direction in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDirection` when nothing matches.
    pub fn get<'a>(key: impl Into<DirectionKey<'a>>) -> CatalogResult<&'a Direction> {
        let key = key.into();
        let found = match key {
            DirectionKey::Resolved(direction) => return Ok(direction),
            DirectionKey::Number(number) => DIRECTION_LIST.iter().find(|d| d.number == number),
            DirectionKey::Code(code) => DIRECTION_LIST
                .iter()
                .find(|d| d.code.eq_ignore_ascii_case(code)),
        };

        found.ok_or_else(|| {
            tracing::debug!(key = %key, "Direction not found");
            CatalogError::InvalidDirection(format!("Unknown direction {}", key))
        })
    }

    /// Every direction in the catalog.
    pub fn all() -> &'static [Direction] {
        &DIRECTION_LIST
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
