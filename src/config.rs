//! Run configuration
//!
//! A run combines simulation parameters and projection coefficients. Each is
//! read from an optional TOML file and falls back to defaults; individual
//! parameters given on the command line override file values.

use std::path::Path;

use clap::Args;
use longview_components::ProjectionCoefficients;
use longview_core::errors::{LongviewError, LongviewResult};
use longview_core::params::SimulationParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-parameter overrides, all percentages in [0, 100].
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    /// CO₂ emission rate
    #[arg(long = "co2", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub co2_emission_rate: Option<u8>,

    /// Renewable adoption
    #[arg(long = "renewable", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub renewable_adoption: Option<u8>,

    /// Population growth rate
    #[arg(long = "population", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub population_growth: Option<u8>,

    /// AI regulation
    #[arg(long = "ai", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub ai_regulation: Option<u8>,

    /// Conflict probability
    #[arg(long = "conflict", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub conflict_probability: Option<u8>,

    /// Economic expansion
    #[arg(long = "economy", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub economic_expansion: Option<u8>,

    /// Geo-engineering level
    #[arg(long = "geo", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub geo_engineering: Option<u8>,

    /// Space colonization
    #[arg(long = "space", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub space_colonization: Option<u8>,
}

impl ParamOverrides {
    /// Copy of `params` with every given override applied.
    pub fn apply(&self, params: SimulationParams) -> SimulationParams {
        SimulationParams {
            co2_emission_rate: self.co2_emission_rate.unwrap_or(params.co2_emission_rate),
            renewable_adoption: self.renewable_adoption.unwrap_or(params.renewable_adoption),
            population_growth: self.population_growth.unwrap_or(params.population_growth),
            ai_regulation: self.ai_regulation.unwrap_or(params.ai_regulation),
            conflict_probability: self
                .conflict_probability
                .unwrap_or(params.conflict_probability),
            economic_expansion: self.economic_expansion.unwrap_or(params.economic_expansion),
            geo_engineering: self.geo_engineering.unwrap_or(params.geo_engineering),
            space_colonization: self.space_colonization.unwrap_or(params.space_colonization),
        }
    }
}

/// Effective configuration of a single run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub params: SimulationParams,
    pub coefficients: ProjectionCoefficients,
}

impl RunConfig {
    /// Resolve the configuration from optional files and overrides.
    ///
    /// The merged parameters and the coefficients are validated before they
    /// are returned.
    pub fn load(
        params_path: Option<&Path>,
        coefficients_path: Option<&Path>,
        overrides: &ParamOverrides,
    ) -> LongviewResult<Self> {
        let params = match params_path {
            Some(path) => SimulationParams::from_toml_file(path)?,
            None => SimulationParams::default(),
        };
        let coefficients = match coefficients_path {
            Some(path) => ProjectionCoefficients::from_toml_file(path)?,
            None => ProjectionCoefficients::default(),
        };

        let params = overrides.apply(params);
        params.validate()?;
        coefficients.validate()?;
        debug!(?params, "Resolved run configuration");

        Ok(Self {
            params,
            coefficients,
        })
    }

    /// Parse a combined document with `[params]` and `[coefficients.*]` tables.
    pub fn from_toml_str(source: &str) -> LongviewResult<Self> {
        let config: RunConfig = toml::from_str(source)?;
        config.params.validate()?;
        config.coefficients.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> LongviewResult<String> {
        toml::to_string(self).map_err(|e| LongviewError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = ParamOverrides {
            co2_emission_rate: Some(90),
            space_colonization: Some(0),
            ..Default::default()
        };
        let params = overrides.apply(SimulationParams::default());
        assert_eq!(params.co2_emission_rate, 90);
        assert_eq!(params.space_colonization, 0);
        assert_eq!(params.renewable_adoption, 30);
        assert_eq!(params.geo_engineering, 20);
    }

    #[test]
    fn test_defaults_without_files() {
        let config = RunConfig::load(None, None, &ParamOverrides::default()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_combined_document() {
        let config = RunConfig::from_toml_str(
            r#"
            [params]
            co2EmissionRate = 75

            [coefficients.carbon]
            floor_ppm = 280.0
            "#,
        )
        .unwrap();
        assert_eq!(config.params.co2_emission_rate, 75);
        assert_eq!(config.params.renewable_adoption, 30);
        assert!((config.coefficients.carbon.floor_ppm - 280.0).abs() < 1e-10);
    }

    #[test]
    fn test_combined_document_rejects_out_of_range() {
        let result = RunConfig::from_toml_str("[params]\nspaceColonization = 150\n");
        assert!(matches!(
            result,
            Err(LongviewError::ParameterOutOfRange {
                name: "spaceColonization",
                value: 150
            })
        ));
    }

    #[test]
    fn test_combined_document_rejects_zero_window() {
        let result = RunConfig::from_toml_str("[coefficients.carbon]\nrise_window = 0.0\n");
        assert!(matches!(result, Err(LongviewError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RunConfig::default();
        let parsed = RunConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
