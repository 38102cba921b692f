//! Physical climate indicators
//!
//! - `GlobalTemperature`: temperature anomaly from emissions, policy cooling
//!   and natural forcing
//! - `SeaIce`: sea level and ice coverage, driven by temperature and the
//!   astronomical cycle

mod sea_ice;
mod temperature;

pub use sea_ice::SeaIce;
pub use temperature::GlobalTemperature;
