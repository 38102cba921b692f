//! Atmospheric CO2 parameters

use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for atmospheric CO2 concentration.
///
/// Concentration rises with net emissions over a short growth window, then a
/// natural drawdown proportional to renewable adoption acts over geological
/// time:
///
/// $$C = \max\left(C_{min},\ C_0 + R \cdot E_{net} \cdot \min(t/t_R, 1) - D \cdot r \cdot \min(t/t_D, 1)\right)$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonParameters {
    /// Present-day concentration.
    /// unit: ppm
    /// default: 421
    pub baseline_ppm: FloatValue,

    /// Rise at full net emissions once the growth window has elapsed.
    /// unit: ppm
    /// default: 400
    pub emission_rise_ppm: FloatValue,

    /// unit: yr
    /// default: 100
    pub rise_window: FloatValue,

    /// Drawdown at 100% renewable adoption.
    /// unit: ppm
    /// default: 171
    pub drawdown_ppm: FloatValue,

    /// unit: yr
    /// default: 100000
    pub drawdown_window: FloatValue,

    /// unit: ppm
    /// default: 250
    pub floor_ppm: FloatValue,
}

impl Default for CarbonParameters {
    fn default() -> Self {
        Self {
            baseline_ppm: 421.0,
            emission_rise_ppm: 400.0,
            rise_window: 100.0,
            drawdown_ppm: 171.0,
            drawdown_window: 100_000.0,
            floor_ppm: 250.0,
        }
    }
}
