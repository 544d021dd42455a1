//! Postal services (the catalog entries a shipment is posted under).

use super::extra_service::{ExtraService, ExtraServiceKey};
use crate::data::{ServiceRecord, SERVICES};
use crate::domain::Input;
use crate::error::{CatalogError, CatalogResult, ModelResult};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default file extension of service symbol images.
pub const DEFAULT_SYMBOL_EXTENSION: &str = "gif";

static SERVICE_LIST: Lazy<Vec<Service>> =
    Lazy::new(|| SERVICES.iter().map(Service::from_record).collect());

/// Label symbol printed for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Premium,
    Express,
    Standard,
    #[default]
    Economic,
}

impl Symbol {
    /// Parse a symbol name; unknown names fall back to [`Symbol::Economic`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "premium" => Self::Premium,
            "express" => Self::Express,
            "standard" => Self::Standard,
            _ => Self::Economic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Express => "express",
            Self::Standard => "standard",
            Self::Economic => "economic",
        }
    }
}

/// A postal service such as SEDEX or PAC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    /// Internal catalog id
    pub id: u32,

    /// Service code used when posting (e.g. 40096 for SEDEX)
    pub code: u32,

    pub description: String,

    /// Short name for labels; falls back to the description
    pub display_name: String,

    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<u32>,

    /// Maximum weight in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<u32>,

    pub symbol: Symbol,

    /// Extra services always contracted with this service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_extra_services: Vec<ExtraService>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_declared_value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_declared_value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<FixedOffset>>,
}

/// What [`Service::get`] accepts: a resolved service, a number (code or id),
/// or numeric text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceKey<'a> {
    Resolved(&'a Service),
    Number(u32),
    Code(&'a str),
}

impl<'a> From<&'a Service> for ServiceKey<'a> {
    fn from(service: &'a Service) -> Self {
        Self::Resolved(service)
    }
}

impl From<u32> for ServiceKey<'_> {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

impl<'a> From<&'a str> for ServiceKey<'a> {
    fn from(code: &'a str) -> Self {
        Self::Code(code)
    }
}

impl Service {
    /// Create a new service with the required fields.
    ///
    /// Description and category are trimmed; the display name starts out as
    /// the description.
    pub fn new<'a>(
        id: u32,
        code: impl Into<Input<'a, u32>>,
        description: &str,
        category: &str,
    ) -> ModelResult<Self> {
        let description = description.trim().to_string();
        Ok(Self {
            id,
            code: code.into().resolve()?,
            display_name: description.clone(),
            description,
            category: category.trim().to_string(),
            postal_code: None,
            max_weight: None,
            symbol: Symbol::default(),
            default_extra_services: Vec::new(),
            min_declared_value: None,
            max_declared_value: None,
            start_date: None,
            end_date: None,
        })
    }

    fn from_record(record: &ServiceRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            description: record.description.trim().to_string(),
            display_name: record.display_name.to_string(),
            category: record.category.to_string(),
            postal_code: None,
            max_weight: record.max_weight,
            symbol: record.symbol.map(Symbol::from_name).unwrap_or_default(),
            default_extra_services: record
                .default_extra_services
                .iter()
                .map(|number| {
                    ExtraService::get(*number).cloned().unwrap_or_else(|_| {
                        panic!(
                            "Service {} references unknown extra service {}",
                            record.code, number
                        )
                    })
                })
                .collect(),
            min_declared_value: record.min_declared_value.map(|cents| Decimal::new(cents, 2)),
            max_declared_value: record.max_declared_value.map(|cents| Decimal::new(cents, 2)),
            start_date: None,
            end_date: None,
        }
    }

    /// Set the label name. An empty name keeps the description.
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        if !display_name.is_empty() {
            self.display_name = display_name.to_string();
        }
        self
    }

    pub fn with_postal_code<'a>(mut self, postal_code: impl Into<Input<'a, u32>>) -> ModelResult<Self> {
        self.postal_code = Some(postal_code.into().resolve()?);
        Ok(self)
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_max_weight(mut self, grams: u32) -> Self {
        self.max_weight = Some(grams);
        self
    }

    pub fn with_declared_value_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_declared_value = Some(min);
        self.max_declared_value = Some(max);
        self
    }

    /// Set the validity window.
    pub fn with_validity<'a>(
        mut self,
        start_date: impl Into<Input<'a, DateTime<FixedOffset>>>,
        end_date: impl Into<Input<'a, DateTime<FixedOffset>>>,
    ) -> ModelResult<Self> {
        self.start_date = Some(start_date.into().resolve()?);
        self.end_date = Some(end_date.into().resolve()?);
        Ok(self)
    }

    /// Resolve and attach the default extra services.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidExtraService` if any key is unknown.
    pub fn with_default_extra_services<'a, I, K>(mut self, extra_services: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<ExtraServiceKey<'a>>,
    {
        self.default_extra_services = extra_services
            .into_iter()
            .map(|key| ExtraService::get(key).cloned())
            .collect::<CatalogResult<_>>()?;
        Ok(self)
    }

    /// Look up a service in the catalog by code or id.
    ///
    /// A resolved service is returned unchanged. Text is trimmed and read as
    /// a number, so `"04162"` looks up service 4162.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidService` when nothing matches or the text
    /// is not numeric.
    pub fn get<'a>(key: impl Into<ServiceKey<'a>>) -> CatalogResult<&'a Service> {
        let number = match key.into() {
            ServiceKey::Resolved(service) => return Ok(service),
            ServiceKey::Number(number) => number,
            ServiceKey::Code(code) => code
                .trim()
                .parse::<u32>()
                .map_err(|_| CatalogError::InvalidService(format!("{:?}", code)))?,
        };

        SERVICE_LIST
            .iter()
            .find(|service| service.code == number || service.id == number)
            .ok_or_else(|| {
                tracing::debug!(number, "Service not found");
                CatalogError::InvalidService(number.to_string())
            })
    }

    /// Every service in the catalog.
    pub fn all() -> &'static [Service] {
        &SERVICE_LIST
    }

    /// Whether a declared value fits this service's bounds.
    pub fn accepts_declared_value(&self, value: Decimal) -> bool {
        self.min_declared_value.map_or(true, |min| value >= min)
            && self.max_declared_value.map_or(true, |max| value <= max)
    }

    /// Path of the symbol image under `data_dir`, e.g. `data/express.gif`.
    ///
    /// The file is not opened or checked for existence.
    pub fn symbol_path(&self, data_dir: impl AsRef<Path>, extension: &str) -> PathBuf {
        data_dir
            .as_ref()
            .join(format!("{}.{}", self.symbol.as_str(), extension))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EXTRA_SERVICE_AR, EXTRA_SERVICE_RR, SERVICE_PAC, SERVICE_SEDEX};
    use std::str::FromStr;

    #[test]
    fn test_get_by_code() {
        let sedex = Service::get(SERVICE_SEDEX).unwrap();
        assert_eq!(sedex.id, 104625);
        assert_eq!(sedex.display_name, "SEDEX");
        assert_eq!(sedex.symbol, Symbol::Express);
        assert_eq!(sedex.to_string(), "40096");
    }

    #[test]
    fn test_get_by_id_and_text() {
        assert_eq!(Service::get(109819u32).unwrap().code, SERVICE_PAC);
        assert_eq!(Service::get(" 41068 ").unwrap().code, SERVICE_PAC);
    }

    #[test]
    fn test_get_resolved_is_identity() {
        let custom = Service::new(1, 12345u32, "CUSTOM", "SEDEX").unwrap();
        assert!(std::ptr::eq(Service::get(&custom).unwrap(), &custom));
    }

    #[test]
    fn test_get_unknown() {
        assert_eq!(
            Service::get(12345u32),
            Err(CatalogError::InvalidService("12345".to_string()))
        );
        assert!(Service::get("PAC").is_err());
    }

    #[test]
    fn test_catalog_defaults() {
        let pac = Service::get(SERVICE_PAC).unwrap();
        assert_eq!(pac.max_weight, Some(30_000));
        assert_eq!(pac.default_extra_services.len(), 1);
        assert_eq!(pac.default_extra_services[0].number(), EXTRA_SERVICE_RR);
        assert_eq!(pac.min_declared_value, Some(Decimal::from_str("17.00").unwrap()));
        assert_eq!(pac.max_declared_value, Some(Decimal::from_str("3000.00").unwrap()));

        let letter = Service::get(10065u32).unwrap();
        assert_eq!(letter.symbol, Symbol::Economic);
        assert!(letter.default_extra_services.is_empty());
    }

    #[test]
    fn test_catalog_extra_service_references_resolve() {
        for record in SERVICES.iter() {
            let service = Service::get(record.code).unwrap();
            let numbers: Vec<u32> = service
                .default_extra_services
                .iter()
                .map(ExtraService::number)
                .collect();
            assert_eq!(numbers, record.default_extra_services, "service {}", record.code);
        }
    }

    #[test]
    fn test_new_normalizes_text() {
        let service = Service::new(104625, " 40096 ", "  SEDEX (CONTRATO) ", " SEDEX ")
            .unwrap()
            .with_display_name("");
        assert_eq!(service.code, 40096);
        assert_eq!(service.description, "SEDEX (CONTRATO)");
        assert_eq!(service.display_name, "SEDEX (CONTRATO)");
        assert_eq!(service.category, "SEDEX");
    }

    #[test]
    fn test_new_rejects_non_numeric_code() {
        assert!(Service::new(1, "SEDEX", "SEDEX", "SEDEX").is_err());
    }

    #[test]
    fn test_default_extra_services_resolution() {
        let service = Service::new(1, 40096u32, "SEDEX", "SEDEX")
            .unwrap()
            .with_default_extra_services([EXTRA_SERVICE_AR, EXTRA_SERVICE_RR])
            .unwrap();
        assert_eq!(service.default_extra_services.len(), 2);

        let result = Service::new(1, 40096u32, "SEDEX", "SEDEX")
            .unwrap()
            .with_default_extra_services(["ZZ"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_declared_value_bounds() {
        let pac = Service::get(SERVICE_PAC).unwrap();
        assert!(pac.accepts_declared_value(Decimal::from(100)));
        assert!(!pac.accepts_declared_value(Decimal::from(10)));
        assert!(!pac.accepts_declared_value(Decimal::from(5000)));
    }

    #[test]
    fn test_symbol_path() {
        let sedex = Service::get(SERVICE_SEDEX).unwrap();
        assert_eq!(
            sedex.symbol_path("data", DEFAULT_SYMBOL_EXTENSION),
            PathBuf::from("data").join("express.gif")
        );
    }

    #[test]
    fn test_validity_window() {
        let service = Service::new(1, 40096u32, "SEDEX", "SEDEX")
            .unwrap()
            .with_validity("2014-05-09 00:00:00-03:00", "2018-05-09 00:00:00-03:00")
            .unwrap();
        assert!(service.start_date < service.end_date);
    }
}
