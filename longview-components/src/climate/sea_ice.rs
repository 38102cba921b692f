use longview_core::utils::numeric::{clamp_percent, round_to};
use longview_core::FloatValue;

use crate::parameters::SeaIceParameters;

/// Sea level and ice coverage.
///
/// Sea level: $\Delta h = k_h (T - T_0) + A_h \cdot a$
///
/// Ice coverage: $I = I_0 - k_I (T - T_0) - A_I \cdot a$, clamped to [0, 100]
///
/// where $a$ is the astronomical phase (zero before deep-time cycling starts).
#[derive(Debug, Clone, Default)]
pub struct SeaIce {
    parameters: SeaIceParameters,
}

impl SeaIce {
    pub fn new() -> Self {
        Self::from_parameters(SeaIceParameters::default())
    }

    pub fn from_parameters(parameters: SeaIceParameters) -> Self {
        Self { parameters }
    }

    /// Sea level relative to present (m), two decimals.
    pub fn sea_level(&self, temperature: FloatValue, astronomical: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let thermal = p.thermal_expansion * (temperature - p.baseline_temperature);
        round_to(thermal + p.astronomical_sea_level * astronomical, 2)
    }

    /// Ice coverage (%), one decimal.
    pub fn ice_coverage(&self, temperature: FloatValue, astronomical: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let coverage = p.ice_baseline
            - p.ice_per_degree * (temperature - p.baseline_temperature)
            - p.ice_astronomical * astronomical;
        round_to(clamp_percent(coverage), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_day() {
        let component = SeaIce::new();
        assert_eq!(component.sea_level(1.2, 0.0), 0.0);
        assert_eq!(component.ice_coverage(1.2, 0.0), 12.0);
    }

    #[test]
    fn test_warming_raises_sea_and_melts_ice() {
        let component = SeaIce::new();
        assert_eq!(component.sea_level(3.2, 0.0), 1.0);
        assert_eq!(component.ice_coverage(3.2, 0.0), 4.0);
        assert_eq!(component.ice_coverage(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_glacial_phase() {
        let component = SeaIce::new();
        // A full glacial phase drops the sea by 60 m and adds 20 points of ice
        assert_eq!(component.sea_level(1.2, -1.0), -60.0);
        assert_eq!(component.ice_coverage(1.2, -1.0), 32.0);
    }
}
