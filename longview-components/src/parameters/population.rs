//! Population parameters

use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for total population.
///
/// Two regimes:
///
/// 1. **Near term** (offset below `near_term_years`): linear growth from the
///    present-day baseline, damped by heat stress:
///    $$P = P_0 (1 + g \cdot p \cdot t \cdot s), \quad s = \max(s_{min}, 1 - k_s \max(0, T - T_s))$$
///
/// 2. **Long term**: logistic approach from the end of the near-term regime to a
///    carrying capacity set by renewable adoption and temperature,
///    $$K = \max(K_{min}, K_0 + K_r \cdot r - K_T \max(0, T - T_s))$$
///    with a crash-then-recover envelope after civilization collapse and an
///    off-world term growing with space colonization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationParameters {
    /// Present-day population
    /// unit: billion
    /// default: 8.1
    pub baseline: FloatValue,

    /// Length of the near-term regime
    /// unit: yr
    /// default: 200
    pub near_term_years: FloatValue,

    /// Linear growth per year at 100% population growth
    /// unit: 1/yr
    /// default: 0.005
    pub growth_per_year: FloatValue,

    /// Temperature above which heat stress damps growth
    /// unit: °C
    /// default: 1.5
    pub stress_threshold: FloatValue,

    /// Growth damping per °C above the stress threshold
    /// unit: 1/°C
    /// default: 0.1
    pub stress_per_degree: FloatValue,

    /// Lowest stress factor
    /// default: 0.6
    pub stress_floor: FloatValue,

    /// unit: billion
    /// default: 12
    pub capacity_base: FloatValue,

    /// Extra carrying capacity at 100% renewables
    /// unit: billion
    /// default: 8
    pub capacity_renewable: FloatValue,

    /// Capacity lost per °C above the stress threshold
    /// unit: billion/°C
    /// default: 2.5
    pub capacity_per_degree: FloatValue,

    /// unit: billion
    /// default: 1
    pub capacity_floor: FloatValue,

    /// Logistic rate at 100% population growth, before the offset below is added
    /// unit: 1/yr
    /// default: 0.02
    pub logistic_rate: FloatValue,

    /// Added to the population growth fraction when forming the logistic rate
    /// default: 0.5
    pub logistic_rate_offset: FloatValue,

    /// Collapse probability above which the crash envelope applies
    /// default: 0.6
    pub collapse_threshold: FloatValue,

    /// unit: yr
    /// default: 1000
    pub collapse_onset: FloatValue,

    /// Half-life of the post-collapse recovery
    /// unit: yr
    /// default: 50000
    pub recovery_half_life: FloatValue,

    /// Off-world population at 100% space colonization after the full horizon
    /// unit: billion
    /// default: 20
    pub off_world_scale: FloatValue,

    /// unit: billion
    /// default: 0.01
    pub floor: FloatValue,
}

impl Default for PopulationParameters {
    fn default() -> Self {
        Self {
            baseline: 8.1,
            near_term_years: 200.0,
            growth_per_year: 0.005,
            stress_threshold: 1.5,
            stress_per_degree: 0.1,
            stress_floor: 0.6,

            capacity_base: 12.0,
            capacity_renewable: 8.0,
            capacity_per_degree: 2.5,
            capacity_floor: 1.0,
            logistic_rate: 0.02,
            logistic_rate_offset: 0.5,

            collapse_threshold: 0.6,
            collapse_onset: 1_000.0,
            recovery_half_life: 50_000.0,

            off_world_scale: 20.0,
            floor: 0.01,
        }
    }
}
