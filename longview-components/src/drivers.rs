//! Shared per-point intermediates
//!
//! Quantities that several indicators depend on are computed once per time
//! point and threaded through every formula, so that e.g. the collapse
//! probability is numerically identical wherever it is used.

use longview_core::params::{fraction, SimulationParams};
use longview_core::{offset_of, FloatValue, Year};

use crate::forcing::EventSignal;

/// Policy parameters as fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyFractions {
    pub co2_emission_rate: FloatValue,
    pub renewable_adoption: FloatValue,
    pub population_growth: FloatValue,
    pub ai_regulation: FloatValue,
    pub conflict_probability: FloatValue,
    pub economic_expansion: FloatValue,
    pub geo_engineering: FloatValue,
    pub space_colonization: FloatValue,
}

impl From<&SimulationParams> for PolicyFractions {
    fn from(params: &SimulationParams) -> Self {
        Self {
            co2_emission_rate: fraction(params.co2_emission_rate),
            renewable_adoption: fraction(params.renewable_adoption),
            population_growth: fraction(params.population_growth),
            ai_regulation: fraction(params.ai_regulation),
            conflict_probability: fraction(params.conflict_probability),
            economic_expansion: fraction(params.economic_expansion),
            geo_engineering: fraction(params.geo_engineering),
            space_colonization: fraction(params.space_colonization),
        }
    }
}

/// Everything an indicator formula may read besides earlier indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct Drivers {
    pub year: Year,
    /// Years since the epoch
    pub offset: FloatValue,
    pub params: SimulationParams,
    pub policy: PolicyFractions,
    pub net_emission: FloatValue,
    /// Temperature anomaly from emissions alone, before any cooling (°C)
    pub anthropogenic_warming: FloatValue,
    pub collapse_probability: FloatValue,
    /// Astronomical phase, zero before the onset of deep-time cycling
    pub astronomical: FloatValue,
    pub volcanic: EventSignal,
    pub extinction: EventSignal,
}

impl Drivers {
    /// Offset as used by the formulas.
    pub fn offset_for(year: Year) -> FloatValue {
        offset_of(year) as FloatValue
    }
}
