use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for sea level and ice coverage.
///
/// Both respond to warming above the present-day anomaly and, in deep time,
/// to the astronomical cycle: warm phases raise the sea and shrink the ice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeaIceParameters {
    /// Reference anomaly for both responses (°C).
    /// Default: 1.2
    pub baseline_temperature: FloatValue,
    /// Thermal sea level rise (m/°C).
    /// Default: 0.5
    pub thermal_expansion: FloatValue,
    /// Sea level swing per unit of astronomical phase (m).
    /// Default: 60
    pub astronomical_sea_level: FloatValue,
    /// Present-day ice coverage (%).
    /// Default: 12
    pub ice_baseline: FloatValue,
    /// Ice loss per °C of warming (%).
    /// Default: 4
    pub ice_per_degree: FloatValue,
    /// Ice swing per unit of astronomical phase (%).
    /// Default: 20
    pub ice_astronomical: FloatValue,
}

impl Default for SeaIceParameters {
    fn default() -> Self {
        Self {
            baseline_temperature: 1.2,
            thermal_expansion: 0.5,
            astronomical_sea_level: 60.0,
            ice_baseline: 12.0,
            ice_per_degree: 4.0,
            ice_astronomical: 20.0,
        }
    }
}
