use longview_core::params::SimulationParams;
use longview_core::utils::numeric::{clamp_percent, excess_over, round_to};
use longview_core::FloatValue;

use crate::parameters::ConflictParameters;

/// Conflict index from conflict probability, economic stress and climate rage.
#[derive(Debug, Clone, Default)]
pub struct Conflict {
    parameters: ConflictParameters,
}

impl Conflict {
    pub fn new() -> Self {
        Self::from_parameters(ConflictParameters::default())
    }

    pub fn from_parameters(parameters: ConflictParameters) -> Self {
        Self { parameters }
    }

    /// Economic stress in [0, 1]; zero at or above the pivot expansion.
    pub fn economic_stress(&self, economic_expansion: u8) -> FloatValue {
        let pivot = self.parameters.economic_stress_pivot;
        ((pivot - economic_expansion as FloatValue) / pivot).max(0.0)
    }

    /// Conflict index, clamped to [0, 100] and rounded to a whole number.
    pub fn calculate(&self, params: &SimulationParams, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let index = p.conflict_weight * params.conflict_probability as FloatValue
            + p.economic_stress_weight * self.economic_stress(params.economic_expansion)
            + p.climate_rage_per_degree * excess_over(temperature, p.climate_rage_threshold);
        round_to(clamp_percent(index), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // 0.55 * 30 = 16.5, rounded half away from zero
        let component = Conflict::new();
        assert_eq!(component.calculate(&SimulationParams::default(), 1.2), 17.0);
    }

    #[test]
    fn test_economic_stress() {
        let component = Conflict::new();
        assert_eq!(component.economic_stress(50), 0.0);
        assert_eq!(component.economic_stress(80), 0.0);
        assert_eq!(component.economic_stress(0), 1.0);
        assert_eq!(component.economic_stress(25), 0.5);
    }

    #[test]
    fn test_clamped() {
        let params = SimulationParams {
            conflict_probability: 100,
            economic_expansion: 0,
            ..Default::default()
        };
        assert_eq!(Conflict::new().calculate(&params, 9.0), 100.0);
    }
}
