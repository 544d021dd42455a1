//! Constant lookup tables for the Correios catalog.
//!
//! Everything here is read-only data compiled into the binary. The typed
//! models in [`crate::models`] and [`crate::domain`] are built from these
//! records on first use.

pub mod directions;
pub mod extra_services;
pub mod services;
pub mod states;
pub mod tracking;

pub use directions::{DirectionRecord, DIRECTIONS};
pub use extra_services::{
    ExtraServiceRecord, EXTRA_SERVICES, EXTRA_SERVICE_AR, EXTRA_SERVICE_MP, EXTRA_SERVICE_RR,
    EXTRA_SERVICE_VD,
};
pub use services::{
    ServiceRecord, SERVICES, SERVICE_E_SEDEX, SERVICE_PAC, SERVICE_SEDEX, SERVICE_SEDEX10,
    SERVICE_SEDEX12,
};
pub use states::STATES;
pub use tracking::{
    tracking_event_type_description, tracking_prefix_description, TRACKING_EVENT_TYPES,
    TRACKING_PREFIXES,
};
