//! Socioeconomic indicators
//!
//! - `CollapseRisk`: probability of civilizational breakdown, shared by
//!   temperature, population, GDP and civilization level
//! - `Population`: near-term growth, then a logistic approach to carrying capacity
//! - `Economy`: compounding GDP, then re-based on population and technology
//! - `Conflict`: conflict index
//! - `Civilization`: civilization level

mod civilization;
mod collapse;
mod conflict;
mod economy;
mod population;

pub use civilization::Civilization;
pub use collapse::CollapseRisk;
pub use conflict::Conflict;
pub use economy::Economy;
pub use population::Population;
