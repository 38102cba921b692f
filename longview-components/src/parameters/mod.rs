//! Projection coefficients
//!
//! Every constant used by the per-point projector lives in one parameter
//! struct per indicator. Each struct provides defaults that reproduce the
//! reference behaviour, and every field can be overridden from TOML or JSON.

mod biodiversity;
mod carbon;
mod civilization;
mod collapse;
mod conflict;
mod economy;
mod health;
mod population;
mod sea_ice;
mod warming;

pub use biodiversity::BiodiversityParameters;
pub use carbon::CarbonParameters;
pub use civilization::CivilizationParameters;
pub use collapse::CollapseParameters;
pub use conflict::ConflictParameters;
pub use economy::EconomyParameters;
pub use health::HealthParameters;
pub use population::PopulationParameters;
pub use sea_ice::SeaIceParameters;
pub use warming::WarmingParameters;

use longview_core::errors::{LongviewError, LongviewResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The complete coefficient table used by a [`Projector`](crate::Projector).
///
/// Missing sections and fields fall back to their defaults, so a document only
/// needs to name the coefficients it changes:
///
/// ```toml
/// [warming]
/// sensitivity = 3.0
///
/// [population]
/// capacity_base = 10.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionCoefficients {
    pub warming: WarmingParameters,
    pub collapse: CollapseParameters,
    pub carbon: CarbonParameters,
    pub sea_ice: SeaIceParameters,
    pub population: PopulationParameters,
    pub economy: EconomyParameters,
    pub biodiversity: BiodiversityParameters,
    pub conflict: ConflictParameters,
    pub civilization: CivilizationParameters,
    pub health: HealthParameters,
}

impl ProjectionCoefficients {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(source: &str) -> LongviewResult<Self> {
        let coefficients: ProjectionCoefficients = toml::from_str(source)?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> LongviewResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading projection coefficients");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn from_json_str(source: &str) -> LongviewResult<Self> {
        let coefficients: ProjectionCoefficients =
            serde_json::from_str(source).map_err(|e| LongviewError::Config(e.to_string()))?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Check that the table can be evaluated.
    ///
    /// Every coefficient must be finite. Windows, timescales, half-lives,
    /// divisors and baselines must be strictly positive, and the biodiversity
    /// floor may not exceed its ceiling.
    pub fn validate(&self) -> LongviewResult<()> {
        let table =
            toml::Value::try_from(self).map_err(|e| LongviewError::Config(e.to_string()))?;
        check_finite("", &table)?;

        let positive = [
            ("warming.warming_timescale", self.warming.warming_timescale),
            ("warming.geo_ramp_years", self.warming.geo_ramp_years),
            ("warming.drawdown_years", self.warming.drawdown_years),
            ("warming.collapse_recovery_years", self.warming.collapse_recovery_years),
            ("carbon.baseline_ppm", self.carbon.baseline_ppm),
            ("carbon.rise_window", self.carbon.rise_window),
            ("carbon.drawdown_window", self.carbon.drawdown_window),
            ("population.baseline", self.population.baseline),
            ("population.near_term_years", self.population.near_term_years),
            ("population.capacity_floor", self.population.capacity_floor),
            ("population.recovery_half_life", self.population.recovery_half_life),
            ("economy.baseline", self.economy.baseline),
            ("economy.baseline_population", self.economy.baseline_population),
            ("economy.ai_ramp_years", self.economy.ai_ramp_years),
            ("biodiversity.conflict_ramp_years", self.biodiversity.conflict_ramp_years),
            ("biodiversity.renewable_ramp_years", self.biodiversity.renewable_ramp_years),
            ("biodiversity.geo_ramp_years", self.biodiversity.geo_ramp_years),
            ("biodiversity.recovery_years", self.biodiversity.recovery_years),
            ("conflict.economic_stress_pivot", self.conflict.economic_stress_pivot),
            ("civilization.near_term_years", self.civilization.near_term_years),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(LongviewError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.civilization.technology_log_span <= 1.0 {
            return Err(LongviewError::Config(format!(
                "civilization.technology_log_span must be greater than 1, got {}",
                self.civilization.technology_log_span
            )));
        }
        if self.biodiversity.floor > self.biodiversity.ceiling {
            return Err(LongviewError::Config(format!(
                "biodiversity.floor ({}) exceeds biodiversity.ceiling ({})",
                self.biodiversity.floor, self.biodiversity.ceiling
            )));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> LongviewResult<String> {
        toml::to_string(self).map_err(|e| LongviewError::Config(e.to_string()))
    }
}

/// Reject NaN and infinite values anywhere in a serialised table.
fn check_finite(path: &str, value: &toml::Value) -> LongviewResult<()> {
    match value {
        toml::Value::Float(v) if !v.is_finite() => Err(LongviewError::Config(format!(
            "{} must be finite, got {}",
            path, v
        ))),
        toml::Value::Table(table) => {
            for (key, child) in table {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                check_finite(&child_path, child)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let coefficients = ProjectionCoefficients::from_toml_str("").unwrap();
        assert_eq!(coefficients, ProjectionCoefficients::default());
    }

    #[test]
    fn test_partial_toml() {
        let source = r#"
            [warming]
            sensitivity = 3.0

            [population]
            capacity_base = 10.0
        "#;
        let coefficients = ProjectionCoefficients::from_toml_str(source).unwrap();

        assert!((coefficients.warming.sensitivity - 3.0).abs() < 1e-10);
        assert!((coefficients.warming.baseline_temperature - 1.2).abs() < 1e-10);
        assert!((coefficients.population.capacity_base - 10.0).abs() < 1e-10);
        assert_eq!(coefficients.carbon, CarbonParameters::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let coefficients = ProjectionCoefficients::default();
        let source = coefficients.to_toml_string().unwrap();
        let parsed = ProjectionCoefficients::from_toml_str(&source).unwrap();
        assert_eq!(parsed, coefficients);
    }

    #[test]
    fn test_json_partial() {
        let coefficients =
            ProjectionCoefficients::from_json_str(r#"{"carbon": {"floor_ppm": 200.0}}"#).unwrap();
        assert!((coefficients.carbon.floor_ppm - 200.0).abs() < 1e-10);
        assert!((coefficients.carbon.baseline_ppm - 421.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_document() {
        let result = ProjectionCoefficients::from_toml_str("[warming]\nsensitivity = \"high\"\n");
        assert!(matches!(result, Err(LongviewError::Config(_))));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ProjectionCoefficients::default().validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = ProjectionCoefficients::from_toml_str("[warming]\ngeo_ramp_years = 0.0\n");
        match result {
            Err(LongviewError::Config(message)) => {
                assert!(message.contains("warming.geo_ramp_years"), "{}", message)
            }
            other => panic!("Expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_half_life_rejected_from_json() {
        let result = ProjectionCoefficients::from_json_str(
            r#"{"population": {"recovery_half_life": -50000.0}}"#,
        );
        assert!(matches!(result, Err(LongviewError::Config(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = ProjectionCoefficients::from_toml_str("[health]\npeace_weight = nan\n");
        match result {
            Err(LongviewError::Config(message)) => {
                assert!(message.contains("health.peace_weight"), "{}", message)
            }
            other => panic!("Expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_biodiversity_bounds_rejected() {
        let mut coefficients = ProjectionCoefficients::default();
        coefficients.biodiversity.floor = 80.0;
        coefficients.biodiversity.ceiling = 60.0;
        assert!(matches!(
            coefficients.validate(),
            Err(LongviewError::Config(_))
        ));
    }

    #[test]
    fn test_log_span_must_exceed_one() {
        let mut coefficients = ProjectionCoefficients::default();
        coefficients.civilization.technology_log_span = 1.0;
        assert!(coefficients.validate().is_err());
    }
}
