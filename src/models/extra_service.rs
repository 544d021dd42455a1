//! Extra services (one-time shipment add-ons).

use crate::data::EXTRA_SERVICES;
use crate::error::{CatalogError, CatalogResult};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Required length of an extra service code.
pub const EXTRA_SERVICE_CODE_SIZE: usize = 2;

static EXTRA_SERVICE_LIST: Lazy<Vec<ExtraService>> = Lazy::new(|| {
    EXTRA_SERVICES
        .iter()
        .map(|record| ExtraService {
            number: record.number,
            code: record.code.to_string(),
            name: record.name.to_string(),
        })
        .collect()
});

/// An add-on that can be contracted with a shipment, e.g. a delivery receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExtraService {
    number: u32,
    code: String,
    name: String,
}

/// What [`ExtraService::get`] accepts: a resolved entry, its number or its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraServiceKey<'a> {
    Resolved(&'a ExtraService),
    Number(u32),
    Code(&'a str),
}

impl<'a> From<&'a ExtraService> for ExtraServiceKey<'a> {
    fn from(service: &'a ExtraService) -> Self {
        Self::Resolved(service)
    }
}

impl From<u32> for ExtraServiceKey<'_> {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

impl<'a> From<&'a str> for ExtraServiceKey<'a> {
    fn from(code: &'a str) -> Self {
        Self::Code(code)
    }
}

impl fmt::Display for ExtraServiceKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(service) => write!(f, "{}", service.code),
            Self::Number(number) => write!(f, "{}", number),
            Self::Code(code) => write!(f, "{:?}", code),
        }
    }
}

impl ExtraService {
    /// Create a new extra service.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidExtraService` for a zero number, a code
    /// that is not 2 characters long, or an empty name.
    pub fn new(number: u32, code: &str, name: &str) -> CatalogResult<Self> {
        if number == 0 {
            return Err(CatalogError::InvalidExtraService(format!(
                "Invalid Extra Service Number {}",
                number
            )));
        }

        if code.chars().count() != EXTRA_SERVICE_CODE_SIZE {
            return Err(CatalogError::InvalidExtraService(format!(
                "Invalid Extra Service Code {:?}",
                code
            )));
        }

        if name.is_empty() {
            return Err(CatalogError::InvalidExtraService(format!(
                "Invalid Extra Service Name {:?}",
                name
            )));
        }

        Ok(Self {
            number,
            code: code.to_uppercase(),
            name: name.to_string(),
        })
    }

    /// Look up an extra service in the catalog.
    ///
    /// A resolved entry is returned unchanged; numbers match the service
    /// number and codes match case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidExtraService` when nothing matches.
    pub fn get<'a>(key: impl Into<ExtraServiceKey<'a>>) -> CatalogResult<&'a ExtraService> {
        let key = key.into();
        let found = match key {
            ExtraServiceKey::Resolved(service) => return Ok(service),
            ExtraServiceKey::Number(number) => {
                EXTRA_SERVICE_LIST.iter().find(|s| s.number == number)
            }
            ExtraServiceKey::Code(code) => EXTRA_SERVICE_LIST
                .iter()
                .find(|s| s.code.eq_ignore_ascii_case(code)),
        };

        found.ok_or_else(|| {
            tracing::debug!(key = %key, "Extra service not found");
            CatalogError::InvalidExtraService(format!("Unknown Service {}", key))
        })
    }

    /// Every extra service in the catalog.
    pub fn all() -> &'static [ExtraService] {
        &EXTRA_SERVICE_LIST
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

impl fmt::Display for ExtraService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
