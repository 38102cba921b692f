//! Core types for Longview projections
//!
//! This crate holds everything that does not depend on the projection formulas:
//! the policy parameters, the non-uniform time axis, era classification, the
//! per-year output record, and the helpers that UI collaborators use to
//! navigate a finished projection.
//!
//! The formulas themselves live in `longview-components`.

pub mod era;
pub mod errors;
pub mod params;
pub mod presentation;
pub mod series;
pub mod session;
pub mod standard_variables;
pub mod timepoints;
pub mod utils;
pub mod year_data;

/// Floating point type used for every derived indicator.
pub type FloatValue = f64;

/// Absolute calendar year.
pub type Year = i64;

/// First year of every projection.
pub const EPOCH_YEAR: Year = 2025;

/// Length of the projection horizon in years.
pub const HORIZON_YEARS: Year = 1_000_000;

/// Last year of every projection.
pub const FINAL_YEAR: Year = EPOCH_YEAR + HORIZON_YEARS;

/// Elapsed years since [`EPOCH_YEAR`].
pub fn offset_of(year: Year) -> Year {
    year - EPOCH_YEAR
}
