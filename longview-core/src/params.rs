//! Policy parameters
//!
//! The eight user-tunable knobs that drive a projection. Each knob is an
//! integer percentage in [0, 100].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::{LongviewError, LongviewResult};
use crate::FloatValue;

/// Upper bound of every percentage parameter.
pub const MAX_PERCENT: u8 = 100;

/// Inputs to a projection.
///
/// The engine does not clamp these values: [`SimulationParams::validate`] is the
/// boundary check and callers are expected to run it (or [`SimulationParams::clamped`])
/// before projecting. Negative values are unrepresentable.
///
/// Missing fields in TOML/JSON documents fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationParams {
    /// Fossil CO₂ emission rate.
    /// Default: 50
    pub co2_emission_rate: u8,

    /// Share of energy from renewables.
    /// Default: 30
    pub renewable_adoption: u8,

    /// Population growth rate.
    /// Default: 50
    pub population_growth: u8,

    /// Strength of AI regulation. Low regulation boosts near-term GDP.
    /// Default: 30
    pub ai_regulation: u8,

    /// Probability of large-scale conflict.
    /// Default: 30
    pub conflict_probability: u8,

    /// Economic expansion rate.
    /// Default: 50
    pub economic_expansion: u8,

    /// Deployment of solar geo-engineering.
    /// Default: 20
    pub geo_engineering: u8,

    /// Investment in space colonization.
    /// Default: 10
    pub space_colonization: u8,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            co2_emission_rate: 50,
            renewable_adoption: 30,
            population_growth: 50,
            ai_regulation: 30,
            conflict_probability: 30,
            economic_expansion: 50,
            geo_engineering: 20,
            space_colonization: 10,
        }
    }
}

impl SimulationParams {
    /// Field names paired with their values, in declaration order.
    pub fn entries(&self) -> [(&'static str, u8); 8] {
        [
            ("co2EmissionRate", self.co2_emission_rate),
            ("renewableAdoption", self.renewable_adoption),
            ("populationGrowth", self.population_growth),
            ("aiRegulation", self.ai_regulation),
            ("conflictProbability", self.conflict_probability),
            ("economicExpansion", self.economic_expansion),
            ("geoEngineering", self.geo_engineering),
            ("spaceColonization", self.space_colonization),
        ]
    }

    /// Check that every parameter lies in [0, 100].
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> LongviewResult<()> {
        for (name, value) in self.entries() {
            if value > MAX_PERCENT {
                return Err(LongviewError::ParameterOutOfRange {
                    name,
                    value: value as u32,
                });
            }
        }
        Ok(())
    }

    /// Copy of these parameters with every field clamped to 100.
    pub fn clamped(&self) -> Self {
        let clamp = |v: u8| v.min(MAX_PERCENT);
        Self {
            co2_emission_rate: clamp(self.co2_emission_rate),
            renewable_adoption: clamp(self.renewable_adoption),
            population_growth: clamp(self.population_growth),
            ai_regulation: clamp(self.ai_regulation),
            conflict_probability: clamp(self.conflict_probability),
            economic_expansion: clamp(self.economic_expansion),
            geo_engineering: clamp(self.geo_engineering),
            space_colonization: clamp(self.space_colonization),
        }
    }

    /// Parse parameters from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> LongviewResult<Self> {
        let params: SimulationParams = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Read parameters from a TOML file and validate them.
    pub fn from_toml_file(path: impl AsRef<Path>) -> LongviewResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading simulation parameters");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Convert an integer percentage into a fraction in [0, 1].
pub fn fraction(value: u8) -> FloatValue {
    value as FloatValue / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = SimulationParams::default();
        assert_eq!(params.co2_emission_rate, 50);
        assert_eq!(params.renewable_adoption, 30);
        assert_eq!(params.population_growth, 50);
        assert_eq!(params.ai_regulation, 30);
        assert_eq!(params.conflict_probability, 30);
        assert_eq!(params.economic_expansion, 50);
        assert_eq!(params.geo_engineering, 20);
        assert_eq!(params.space_colonization, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let params = SimulationParams {
            conflict_probability: 101,
            ..Default::default()
        };
        match params.validate() {
            Err(LongviewError::ParameterOutOfRange { name, value }) => {
                assert_eq!(name, "conflictProbability");
                assert_eq!(value, 101);
            }
            other => panic!("Expected ParameterOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_clamped() {
        let params = SimulationParams {
            co2_emission_rate: 255,
            geo_engineering: 120,
            ..Default::default()
        };
        let clamped = params.clamped();
        assert_eq!(clamped.co2_emission_rate, 100);
        assert_eq!(clamped.geo_engineering, 100);
        assert_eq!(clamped.renewable_adoption, 30);
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(0), 0.0);
        assert_eq!(fraction(50), 0.5);
        assert_eq!(fraction(100), 1.0);
    }

    #[test]
    fn test_partial_toml() {
        let params = SimulationParams::from_toml_str("co2EmissionRate = 90\nspaceColonization = 75\n")
            .expect("Partial TOML should parse");
        assert_eq!(params.co2_emission_rate, 90);
        assert_eq!(params.space_colonization, 75);
        assert_eq!(params.renewable_adoption, 30);
    }

    #[test]
    fn test_toml_out_of_range() {
        let result = SimulationParams::from_toml_str("renewableAdoption = 150\n");
        assert!(matches!(
            result,
            Err(LongviewError::ParameterOutOfRange {
                name: "renewableAdoption",
                ..
            })
        ));
    }

    #[test]
    fn test_toml_malformed() {
        let result = SimulationParams::from_toml_str("renewableAdoption = \"lots\"\n");
        assert!(matches!(result, Err(LongviewError::Config(_))));
    }

    #[test]
    fn test_serialization() {
        let params = SimulationParams {
            ai_regulation: 85,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).expect("Serialization failed");
        assert!(json.contains("\"aiRegulation\":85"));
        let parsed: SimulationParams = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(params, parsed);
    }
}
