//! Biosphere indicators
//!
//! Biodiversity responds to heat, conflict, renewable adoption and
//! geo-engineering, is depressed by extinction pulses and recovers over deep
//! time. Earth health is a weighted composite of the climate, biosphere and
//! society indicators computed before it.

mod biodiversity;
mod health;

pub use biodiversity::Biodiversity;
pub use health::EarthHealth;
