//! Carbon cycle
//!
//! - `AtmosphericCO2`: concentration from net emissions and natural drawdown

mod concentration;

pub use concentration::AtmosphericCO2;
