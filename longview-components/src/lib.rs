//! Projection components for Longview
//!
//! This crate provides the formulas that turn a set of policy parameters into
//! a million-year projection, one independent evaluation per time point.
//!
//! # Module Organisation
//!
//! Components are organised by domain:
//! - `forcing`: Natural forcing (astronomical cycles, volcanic cooling, extinction pulses)
//! - `climate`: Temperature, sea level and ice coverage
//! - `carbon`: Atmospheric CO₂ concentration
//! - `society`: Collapse risk, population, GDP, conflict and civilization level
//! - `biosphere`: Biodiversity and the composite earth health score
//! - `projector`: Ties the components together per time point
//!
//! # Parameters
//!
//! Each component has an associated parameters struct in the `parameters` module
//! with defaults that reproduce the reference projection. The full table can
//! be loaded from TOML or JSON as a [`ProjectionCoefficients`].

pub mod biosphere;
pub mod carbon;
pub mod climate;
pub mod drivers;
pub mod forcing;
pub mod parameters;
pub mod projector;
pub mod society;

pub use parameters::ProjectionCoefficients;
pub use projector::{project, Projector};
