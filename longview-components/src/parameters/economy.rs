//! GDP parameters

use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for world GDP.
///
/// Before `rebase_onset`, GDP compounds from the present-day baseline at a rate
/// driven by economic expansion, an AI-deregulation boost and climate and
/// conflict penalties:
///
/// $$Y = \max(f_{min} Y_0,\ Y_0 (1 + g)^{\min(t, t_c)})$$
///
/// Afterwards GDP is re-based on population and a multi-planetary technology
/// multiplier, scaled down by the collapse probability:
///
/// $$Y = Y_0 \frac{P}{P_0} M (1 + m_s \cdot s \cdot t / H)(1 - d_c \cdot p_c)$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyParameters {
    /// Present-day GDP (trillion USD).
    /// Default: 105
    pub baseline: FloatValue,
    /// Present-day population used for re-basing (billion).
    /// Default: 8.1
    pub baseline_population: FloatValue,
    /// Annual growth at 100% economic expansion.
    /// Default: 0.03
    pub expansion_rate: FloatValue,
    /// Annual growth boost with no AI regulation.
    /// Default: 0.01
    pub ai_boost: FloatValue,
    /// Years for the AI boost to ramp in.
    /// Default: 100
    pub ai_ramp_years: FloatValue,
    /// Temperature above which climate damages apply (°C).
    /// Default: 1.5
    pub climate_threshold: FloatValue,
    /// Annual growth lost per °C above the threshold.
    /// Default: 0.004
    pub climate_penalty: FloatValue,
    /// Annual growth lost at 100% conflict probability.
    /// Default: 0.01
    pub conflict_penalty: FloatValue,
    /// Maximum years of compounding.
    /// Default: 200
    pub compounding_years: FloatValue,
    /// Lowest GDP as a fraction of the baseline during compounding.
    /// Default: 0.2
    pub floor_fraction: FloatValue,
    /// Offset at which GDP is re-based on population (yr).
    /// Default: 1000
    pub rebase_onset: FloatValue,
    /// Technology multiplier applied after re-basing.
    /// Default: 3.0
    pub technology_multiplier: FloatValue,
    /// Extra multiplier at 100% space colonization over the full horizon.
    /// Default: 10.0
    pub space_multiplier: FloatValue,
    /// GDP lost per unit of collapse probability.
    /// Default: 0.7
    pub collapse_drag: FloatValue,
}

impl Default for EconomyParameters {
    fn default() -> Self {
        Self {
            baseline: 105.0,
            baseline_population: 8.1,
            expansion_rate: 0.03,
            ai_boost: 0.01,
            ai_ramp_years: 100.0,
            climate_threshold: 1.5,
            climate_penalty: 0.004,
            conflict_penalty: 0.01,
            compounding_years: 200.0,
            floor_fraction: 0.2,
            rebase_onset: 1_000.0,
            technology_multiplier: 3.0,
            space_multiplier: 10.0,
            collapse_drag: 0.7,
        }
    }
}
