//! Composed Correios records.
//!
//! Addresses, catalog entries (services, extra services, regional
//! directions) and the contract hierarchy (user, contract, posting card).
//! Field-level validation is delegated to the value objects in
//! [`crate::domain`].

pub mod address;
pub mod contract;
pub mod direction;
pub mod extra_service;
pub mod service;
pub mod user;

pub use address::{Address, ZipAddress, ZipAddressParams};
pub use contract::{
    Contract, ContractParams, PostingCard, PostingCardParams, ADMINISTRATIVE_CODE_WIDTH,
    POSTING_CARD_NUMBER_WIDTH,
};
pub use direction::{Direction, DirectionKey};
pub use extra_service::{ExtraService, ExtraServiceKey, EXTRA_SERVICE_CODE_SIZE};
pub use service::{Service, ServiceKey, Symbol, DEFAULT_SYMBOL_EXTENSION};
pub use user::User;
