//! Longview
//!
//! Deterministic million-year projections of climate, economy and society
//! from eight policy parameters.
//!
//! The engine is split across two crates that are re-exported here:
//!
//! - [`longview_core`]: parameters, the time axis, eras, output records and
//!   the presentation/session helpers used by front ends
//! - [`longview_components`]: the forcing functions, coefficient tables and
//!   the per-point [`Projector`]
//!
//! This crate adds run configuration and output writers for the `longview`
//! binary.
//!
//! ```no_run
//! use longview::{project, SimulationParams};
//!
//! let series = project(&SimulationParams::default());
//! let present = series.first().unwrap();
//! assert_eq!(present.year, 2025);
//! ```

pub mod config;
pub mod output;

pub use longview_components;
pub use longview_core;

pub use longview_components::{project, ProjectionCoefficients, Projector};
pub use longview_core::errors::{LongviewError, LongviewResult};
pub use longview_core::params::SimulationParams;
pub use longview_core::series::ProjectionSeries;
pub use longview_core::year_data::YearData;
