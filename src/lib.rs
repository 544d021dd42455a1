//! Correios Models - typed domain models for the Brazilian postal service.
//!
//! This library validates and normalizes the data a Correios integration
//! exchanges: postal codes, states, phone numbers, tax numbers, tracking
//! codes, addresses, and the service / contract catalog. Values are checked
//! once, at construction, and carry their canonical form from then on.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects and the raw-or-valid [`Input`] argument
//! - **models**: Composed records: addresses, services, contracts, users
//! - **data**: Constant catalog tables (services, directions, tracking)
//! - **error**: Catalog, model and configuration error types
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup
//!
//! # Example
//!
//! ```
//! use correios_models::{Address, Service, SERVICE_SEDEX};
//!
//! let address = Address::new("Maria", "Rua Vergueiro", "1000", "São Paulo", "SP", "01504001").unwrap();
//! assert_eq!(address.zip_code.display(), "01504-001");
//!
//! let sedex = Service::get(SERVICE_SEDEX).unwrap();
//! assert_eq!(sedex.display_name, "SEDEX");
//! ```

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

pub use config::Config;
pub use data::{
    EXTRA_SERVICE_AR, EXTRA_SERVICE_MP, EXTRA_SERVICE_RR, EXTRA_SERVICE_VD, SERVICE_E_SEDEX,
    SERVICE_PAC, SERVICE_SEDEX, SERVICE_SEDEX10, SERVICE_SEDEX12,
};
pub use domain::{
    FederalTaxNumber, Input, Normalize, Phone, State, StateTaxNumber, TaxNumber, TrackingCode,
    ValidationError, ValidationResult, ZipCode,
};
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult, ModelError, ModelResult};
pub use models::{
    Address, Contract, ContractParams, Direction, ExtraService, PostingCard, PostingCardParams,
    Service, Symbol, User, ZipAddress, ZipAddressParams,
};
pub use observability::init_logging;
