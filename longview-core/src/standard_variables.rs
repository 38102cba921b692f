//! Standard indicator definitions.
//!
//! Every projection produces the same ten indicators per time point. This
//! module names them, records their units and storage precision, and gives
//! exporters a single table to iterate over.
//!
//! # Available Indicators
//!
//! ## Physical
//! - `Temperature` - Global mean surface temperature anomaly in °C
//! - `SeaLevel` - Sea level relative to present in m
//! - `IceCoverage` - Share of the surface covered by ice in %
//! - `AtmosphericCO2` - Atmospheric CO₂ concentration in ppm
//!
//! ## Biosphere
//! - `Biodiversity` - Biodiversity index (0-100)
//! - `EarthHealth` - Composite planetary health score (0-100)
//!
//! ## Society
//! - `Population` - Total population in billions
//! - `Gdp` - World output in trillion USD
//! - `ConflictIndex` - Conflict intensity (0-100)
//! - `CivilizationLevel` - Technological/civilizational development (0-100)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Temperature,
    Gdp,
    Population,
    Biodiversity,
    EarthHealth,
    SeaLevel,
    ConflictIndex,
    IceCoverage,
    AtmosphericCO2,
    CivilizationLevel,
}

/// Static description of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDefinition {
    /// Key used in serialised output
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub unit: &'static str,
    /// Decimal places retained when the value is stored
    pub decimals: i32,
    pub description: &'static str,
}

impl Indicator {
    /// All indicators in output column order.
    pub const ALL: [Indicator; 10] = [
        Indicator::Temperature,
        Indicator::Gdp,
        Indicator::Population,
        Indicator::Biodiversity,
        Indicator::EarthHealth,
        Indicator::SeaLevel,
        Indicator::ConflictIndex,
        Indicator::IceCoverage,
        Indicator::AtmosphericCO2,
        Indicator::CivilizationLevel,
    ];

    pub fn definition(&self) -> IndicatorDefinition {
        match self {
            Indicator::Temperature => IndicatorDefinition {
                key: "temperature",
                name: "Temperature",
                unit: "°C",
                decimals: 2,
                description: "Global mean surface temperature anomaly",
            },
            Indicator::Gdp => IndicatorDefinition {
                key: "gdp",
                name: "GDP",
                unit: "trillion USD",
                decimals: 1,
                description: "World economic output",
            },
            Indicator::Population => IndicatorDefinition {
                key: "population",
                name: "Population",
                unit: "billion",
                decimals: 2,
                description: "Total population, including off-world settlements",
            },
            Indicator::Biodiversity => IndicatorDefinition {
                key: "biodiversity",
                name: "Biodiversity",
                unit: "index",
                decimals: 0,
                description: "Biodiversity index relative to a pristine biosphere",
            },
            Indicator::EarthHealth => IndicatorDefinition {
                key: "earthHealthScore",
                name: "Earth Health",
                unit: "score",
                decimals: 0,
                description: "Weighted composite of temperature, biodiversity, peace and civilization",
            },
            Indicator::SeaLevel => IndicatorDefinition {
                key: "seaLevel",
                name: "Sea Level",
                unit: "m",
                decimals: 2,
                description: "Sea level change relative to the present",
            },
            Indicator::ConflictIndex => IndicatorDefinition {
                key: "conflictIndex",
                name: "Conflict Index",
                unit: "index",
                decimals: 0,
                description: "Intensity of armed and civil conflict",
            },
            Indicator::IceCoverage => IndicatorDefinition {
                key: "iceCoveragePercent",
                name: "Ice Coverage",
                unit: "%",
                decimals: 1,
                description: "Share of the planetary surface covered by ice",
            },
            Indicator::AtmosphericCO2 => IndicatorDefinition {
                key: "atmosphericCO2ppm",
                name: "Atmospheric CO2",
                unit: "ppm",
                decimals: 0,
                description: "Atmospheric carbon dioxide concentration",
            },
            Indicator::CivilizationLevel => IndicatorDefinition {
                key: "civilizationLevel",
                name: "Civilization Level",
                unit: "index",
                decimals: 0,
                description: "Technological and institutional development",
            },
        }
    }

    /// Look up an indicator by its serialised key.
    pub fn from_key(key: &str) -> Option<Indicator> {
        Self::ALL
            .into_iter()
            .find(|indicator| indicator.definition().key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = Indicator::ALL.iter().map(|i| i.definition().key).collect();
        assert_eq!(keys.len(), Indicator::ALL.len());
    }

    #[test]
    fn test_from_key() {
        for indicator in Indicator::ALL {
            assert_eq!(Indicator::from_key(indicator.definition().key), Some(indicator));
        }
        assert_eq!(Indicator::from_key("unknown"), None);
    }

    #[test]
    fn test_precision() {
        assert_eq!(Indicator::Temperature.definition().decimals, 2);
        assert_eq!(Indicator::Gdp.definition().decimals, 1);
        assert_eq!(Indicator::ConflictIndex.definition().decimals, 0);
    }
}
