use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the biodiversity index.
///
/// Heat and conflict stress reduce the index; renewables and geo-engineering
/// relieve pressure; extinction pulses subtract directly; past
/// `recovery_onset` evolution slowly restores diversity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiodiversityParameters {
    /// Default: 72
    pub baseline: FloatValue,
    /// Default: 1.5 °C
    pub heat_threshold: FloatValue,
    /// Default: 6 per °C
    pub heat_loss_per_degree: FloatValue,
    /// Loss at 100% conflict probability. Default: 10
    pub conflict_loss: FloatValue,
    /// Default: 200 yr
    pub conflict_ramp_years: FloatValue,
    /// Gain at 100% renewable adoption. Default: 8
    pub renewable_gain: FloatValue,
    /// Default: 500 yr
    pub renewable_ramp_years: FloatValue,
    /// Gain at full geo-engineering. Default: 3
    pub geo_gain: FloatValue,
    /// Default: 100 yr
    pub geo_ramp_years: FloatValue,
    /// Default: 100000 yr
    pub recovery_onset: FloatValue,
    /// Default: 20
    pub recovery_max: FloatValue,
    /// Default: 20000 yr
    pub recovery_years: FloatValue,
    /// Default: 5
    pub floor: FloatValue,
    /// Default: 100
    pub ceiling: FloatValue,
}

impl Default for BiodiversityParameters {
    fn default() -> Self {
        Self {
            baseline: 72.0,
            heat_threshold: 1.5,
            heat_loss_per_degree: 6.0,
            conflict_loss: 10.0,
            conflict_ramp_years: 200.0,
            renewable_gain: 8.0,
            renewable_ramp_years: 500.0,
            geo_gain: 3.0,
            geo_ramp_years: 100.0,
            recovery_onset: 100_000.0,
            recovery_max: 20.0,
            recovery_years: 20_000.0,
            floor: 5.0,
            ceiling: 100.0,
        }
    }
}
