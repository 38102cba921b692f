use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the conflict index.
///
/// $$I = w_c \cdot c_{\%} + w_e \max\left(0, \frac{e_p - e_{\%}}{e_p}\right) + w_T \max(0, T - T_r)$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictParameters {
    /// Weight of the conflict probability percentage.
    /// Default: 0.55
    pub conflict_weight: FloatValue,
    /// Index points at maximal economic stress.
    /// Default: 25
    pub economic_stress_weight: FloatValue,
    /// Economic expansion percentage below which stress appears.
    /// Default: 50
    pub economic_stress_pivot: FloatValue,
    /// Default: 2.5 °C
    pub climate_rage_threshold: FloatValue,
    /// Default: 8 per °C
    pub climate_rage_per_degree: FloatValue,
}

impl Default for ConflictParameters {
    fn default() -> Self {
        Self {
            conflict_weight: 0.55,
            economic_stress_weight: 25.0,
            economic_stress_pivot: 50.0,
            climate_rage_threshold: 2.5,
            climate_rage_per_degree: 8.0,
        }
    }
}
