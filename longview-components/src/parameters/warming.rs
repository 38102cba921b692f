//! Global temperature parameters
//!
//! Coefficients for the closed-form temperature anomaly, combining an
//! anthropogenic warming term with policy cooling, natural forcing and a
//! post-collapse recovery.

use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the global temperature anomaly.
///
/// Anthropogenic warming saturates logarithmically in net emissions and ramps
/// in exponentially:
///
/// $$T_{anthro} = T_0 + S \ln(1 + k \cdot E_{net}) \left(1 - e^{-t/\tau}\right)$$
///
/// where net emissions are $E_{net} = \max(0, e_{CO_2} - f_r \cdot r)$.
///
/// The final anomaly subtracts geo-engineering cooling and long-term carbon
/// drawdown, adds astronomical cycling (deep time only), subtracts volcanic
/// cooling and adds a slow solar brightening trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmingParameters {
    /// Present-day anomaly (°C).
    /// Default: 1.2
    pub baseline_temperature: FloatValue,

    /// Emissions offset per unit of renewable adoption (fraction).
    /// Default: 0.75
    pub renewable_offset: FloatValue,

    /// Warming at full saturation per unit of log-emissions (°C).
    /// Default: 5.0
    pub sensitivity: FloatValue,

    /// Scale applied to net emissions inside the logarithm.
    /// Default: 2.0
    pub emission_log_scale: FloatValue,

    /// e-folding time of the warming ramp (yr).
    /// Default: 200
    pub warming_timescale: FloatValue,

    /// Cooling from geo-engineering at full deployment (°C).
    /// Default: 1.5
    pub geo_max_cooling: FloatValue,

    /// Years for geo-engineering to reach full effect.
    /// Default: 50
    pub geo_ramp_years: FloatValue,

    /// Maximum cooling from renewable-driven carbon drawdown (°C).
    /// Default: 1.5
    pub drawdown_max_cooling: FloatValue,

    /// Years for drawdown to reach full effect at 100% renewables.
    /// Default: 5000
    pub drawdown_years: FloatValue,

    /// Amplitude of the astronomical cycle in temperature (°C).
    /// Default: 4.0
    pub astronomical_amplitude: FloatValue,

    /// Offset after which astronomical cycling is applied (yr).
    /// Default: 10000
    pub astronomical_onset: FloatValue,

    /// Warming from solar brightening over the full horizon (°C).
    /// Default: 0.1
    pub solar_brightening: FloatValue,

    /// Collapse probability above which emissions halt.
    /// Default: 0.5
    pub collapse_recovery_threshold: FloatValue,

    /// Offset after which the post-collapse recovery may start (yr).
    /// Default: 500
    pub collapse_recovery_onset: FloatValue,

    /// Years for the post-collapse recovery to reach full effect.
    /// Default: 20000
    pub collapse_recovery_years: FloatValue,

    /// Fraction of the anthropogenic excess removed by the recovery.
    /// Default: 0.8
    pub collapse_recovery_fraction: FloatValue,

    /// Lowest anomaly the model reports (°C).
    /// Default: -2.0
    pub temperature_floor: FloatValue,
}

impl Default for WarmingParameters {
    fn default() -> Self {
        Self {
            // Anthropogenic warming
            baseline_temperature: 1.2,
            renewable_offset: 0.75,
            sensitivity: 5.0,
            emission_log_scale: 2.0,
            warming_timescale: 200.0,

            // Policy cooling
            geo_max_cooling: 1.5,
            geo_ramp_years: 50.0,
            drawdown_max_cooling: 1.5,
            drawdown_years: 5_000.0,

            // Natural forcing
            astronomical_amplitude: 4.0,
            astronomical_onset: 10_000.0,
            solar_brightening: 0.1,

            // Post-collapse recovery
            collapse_recovery_threshold: 0.5,
            collapse_recovery_onset: 500.0,
            collapse_recovery_years: 20_000.0,
            collapse_recovery_fraction: 0.8,

            temperature_floor: -2.0,
        }
    }
}
