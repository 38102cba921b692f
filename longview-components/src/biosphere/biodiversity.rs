use longview_core::utils::numeric::{excess_over, ramp, round_to};
use longview_core::FloatValue;

use crate::drivers::Drivers;
use crate::parameters::BiodiversityParameters;

/// Biodiversity index.
///
/// The extinction penalty is taken from the driver's extinction signal, so
/// this component carries no event catalogue of its own.
#[derive(Debug, Clone, Default)]
pub struct Biodiversity {
    parameters: BiodiversityParameters,
}

impl Biodiversity {
    pub fn new() -> Self {
        Self::from_parameters(BiodiversityParameters::default())
    }

    pub fn from_parameters(parameters: BiodiversityParameters) -> Self {
        Self { parameters }
    }

    /// Recovery bonus after `recovery_onset`, capped at `recovery_max`.
    pub fn recovery(&self, offset: FloatValue) -> FloatValue {
        let p = &self.parameters;
        if offset <= p.recovery_onset {
            return 0.0;
        }
        (p.recovery_max * (offset - p.recovery_onset) / p.recovery_years).min(p.recovery_max)
    }

    /// Index in [floor, ceiling], rounded to a whole number.
    pub fn calculate(&self, drivers: &Drivers, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let t = drivers.offset;
        let policy = &drivers.policy;

        let index = p.baseline
            - p.heat_loss_per_degree * excess_over(temperature, p.heat_threshold)
            - p.conflict_loss * policy.conflict_probability * ramp(t, p.conflict_ramp_years)
            + p.renewable_gain * policy.renewable_adoption * ramp(t, p.renewable_ramp_years)
            + p.geo_gain * policy.geo_engineering * ramp(t, p.geo_ramp_years)
            - drivers.extinction.magnitude
            + self.recovery(t);

        round_to(index.clamp(p.floor, p.ceiling), 0)
    }
}
