use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the civilization level.
///
/// In the near term the level moves linearly with economic expansion and
/// renewable adoption relative to their defaults. Afterwards a technology
/// term grows logarithmically with time, scaled by space colonization, and a
/// decline term subtracts conflict, extreme heat and collapse risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivilizationParameters {
    /// Default: 50
    pub baseline: FloatValue,
    /// Default: 200 yr
    pub near_term_years: FloatValue,
    /// Default: 0.3 per percentage point
    pub economy_weight: FloatValue,
    /// Default: 50
    pub economy_reference: FloatValue,
    /// Default: 0.2 per percentage point
    pub renewable_weight: FloatValue,
    /// Default: 30
    pub renewable_reference: FloatValue,
    /// Cap on the technology term. Default: 40
    pub technology_cap: FloatValue,
    /// Added to the space colonization fraction. Default: 0.3
    pub technology_base_factor: FloatValue,
    /// Ratio of the horizon end to the near-term end, normalising the log term.
    /// Default: 5000
    pub technology_log_span: FloatValue,
    /// Default: 0.3 per conflict index point
    pub conflict_decline: FloatValue,
    /// Default: 4 °C
    pub heat_threshold: FloatValue,
    /// Default: 5 per °C
    pub heat_decline: FloatValue,
    /// Default: 20 per unit collapse probability
    pub collapse_decline: FloatValue,
}

impl Default for CivilizationParameters {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            near_term_years: 200.0,
            economy_weight: 0.3,
            economy_reference: 50.0,
            renewable_weight: 0.2,
            renewable_reference: 30.0,
            technology_cap: 40.0,
            technology_base_factor: 0.3,
            technology_log_span: 5_000.0,
            conflict_decline: 0.3,
            heat_threshold: 4.0,
            heat_decline: 5.0,
            collapse_decline: 20.0,
        }
    }
}
