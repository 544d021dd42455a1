//! Observability for library consumers.
//!
//! The crate itself only emits `tracing` events (rejected input, catalog
//! misses, posting card registration). Binaries and tests that want to see
//! them install a subscriber with [`init_logging`].

pub mod logging;

pub use logging::{build_filter, init_logging};
