//! Atmospheric CO2 concentration
//!
//! Concentration rises with net emissions during a short growth window and is
//! drawn down over geological time in proportion to renewable adoption. With
//! zero net emissions the concentration can only fall from the present-day
//! baseline.

use longview_core::utils::numeric::{ramp, round_to};
use longview_core::FloatValue;

use crate::parameters::CarbonParameters;

#[derive(Debug, Clone, Default)]
pub struct AtmosphericCO2 {
    parameters: CarbonParameters,
}

impl AtmosphericCO2 {
    pub fn new() -> Self {
        Self::from_parameters(CarbonParameters::default())
    }

    pub fn from_parameters(parameters: CarbonParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &CarbonParameters {
        &self.parameters
    }

    /// Concentration (ppm), floored and rounded to a whole number.
    ///
    /// # Arguments
    ///
    /// * `net_emission` - Net emissions as a fraction of the maximum
    /// * `renewable` - Renewable adoption as a fraction
    /// * `offset` - Years since the epoch
    pub fn calculate(
        &self,
        net_emission: FloatValue,
        renewable: FloatValue,
        offset: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;
        let rise = p.emission_rise_ppm * net_emission * ramp(offset, p.rise_window);
        let drawdown = p.drawdown_ppm * renewable * ramp(offset, p.drawdown_window);
        round_to((p.baseline_ppm + rise - drawdown).max(p.floor_ppm), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_at_epoch() {
        let component = AtmosphericCO2::new();
        assert_eq!(component.calculate(1.0, 0.0, 0.0), 421.0);
    }

    #[test]
    fn test_rise_capped_after_window() {
        let component = AtmosphericCO2::new();
        assert_eq!(component.calculate(0.5, 0.0, 50.0), 521.0);
        assert_eq!(component.calculate(0.5, 0.0, 100.0), 621.0);
        assert_eq!(component.calculate(0.5, 0.0, 5_000.0), 621.0);
    }

    #[test]
    fn test_zero_emissions_never_exceed_baseline() {
        let component = AtmosphericCO2::new();
        for offset in [0.0, 10.0, 1_000.0, 50_000.0, 1_000_000.0] {
            assert!(component.calculate(0.0, 1.0, offset) <= 421.0);
        }
        assert_eq!(component.calculate(0.0, 1.0, 100_000.0), 250.0);
    }

    #[test]
    fn test_floor() {
        let component = AtmosphericCO2::from_parameters(CarbonParameters {
            drawdown_ppm: 400.0,
            ..Default::default()
        });
        assert_eq!(component.calculate(0.0, 1.0, 1_000_000.0), 250.0);
    }
}
