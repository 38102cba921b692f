//! Global temperature anomaly
//!
//! # What This Component Does
//!
//! 1. Derives net emissions from the CO₂ rate and renewable adoption
//! 2. Computes log-saturating anthropogenic warming
//! 3. Subtracts geo-engineering cooling and long-term carbon drawdown
//! 4. Adds astronomical cycling (deep time only), subtracts volcanic cooling
//!    and adds solar brightening
//! 5. After a likely civilization collapse, removes most of the anthropogenic
//!    excess as emissions halt

use longview_core::utils::numeric::{ramp, round_to};
use longview_core::{FloatValue, HORIZON_YEARS};

use crate::drivers::Drivers;
use crate::parameters::WarmingParameters;

#[derive(Debug, Clone, Default)]
pub struct GlobalTemperature {
    parameters: WarmingParameters,
}

impl GlobalTemperature {
    pub fn new() -> Self {
        Self::from_parameters(WarmingParameters::default())
    }

    pub fn from_parameters(parameters: WarmingParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &WarmingParameters {
        &self.parameters
    }

    /// Net emissions after renewable offset, never negative.
    ///
    /// # Arguments
    ///
    /// * `co2_rate` - CO₂ emission rate as a fraction
    /// * `renewable` - Renewable adoption as a fraction
    pub fn net_emission(&self, co2_rate: FloatValue, renewable: FloatValue) -> FloatValue {
        (co2_rate - self.parameters.renewable_offset * renewable).max(0.0)
    }

    /// Anomaly from emissions alone, before geo-engineering or natural forcing.
    pub fn anthropogenic_warming(&self, net_emission: FloatValue, offset: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let saturation = p.sensitivity * (1.0 + p.emission_log_scale * net_emission).ln();
        let progress = 1.0 - (-offset.max(0.0) / p.warming_timescale).exp();
        p.baseline_temperature + saturation * progress
    }

    /// Temperature anomaly (°C), floored and rounded to two decimals.
    pub fn calculate(&self, drivers: &Drivers) -> FloatValue {
        let p = &self.parameters;
        let t = drivers.offset;
        let policy = &drivers.policy;

        let geo_cooling = policy.geo_engineering * p.geo_max_cooling * ramp(t, p.geo_ramp_years);
        let drawdown = (policy.renewable_adoption * p.drawdown_max_cooling * t / p.drawdown_years)
            .clamp(0.0, p.drawdown_max_cooling);
        let astronomical = p.astronomical_amplitude * drivers.astronomical;
        let solar = p.solar_brightening * t / HORIZON_YEARS as FloatValue;

        let mut temperature = drivers.anthropogenic_warming - geo_cooling - drawdown + astronomical
            - drivers.volcanic.magnitude
            + solar;

        if drivers.collapse_probability > p.collapse_recovery_threshold
            && t > p.collapse_recovery_onset
        {
            let excess = drivers.anthropogenic_warming - p.baseline_temperature;
            temperature -= p.collapse_recovery_fraction
                * excess
                * ramp(t - p.collapse_recovery_onset, p.collapse_recovery_years);
        }

        round_to(temperature.max(p.temperature_floor), 2)
    }
}
