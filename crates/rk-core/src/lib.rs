//! rk-core: stable foundation for ratekit.
//!
//! Contains:
//! - error (the mechanism-load `ConfigurationError`)
//! - numeric (Real, physical constants, tolerances, float helpers)
//! - units (uom SI aliases + rate-law unit declarations)
//! - timing (opt-in instrumentation for drivers)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::ConfigurationError;
pub use numeric::*;
pub use units::*;
