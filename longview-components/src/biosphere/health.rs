use longview_core::utils::numeric::{clamp_percent, round_to};
use longview_core::FloatValue;

use crate::parameters::HealthParameters;

/// Composite earth health score.
///
/// $H = w_T \cdot S_T + w_B \cdot B + w_P (100 - C) + w_L \cdot L$
///
/// where $S_T = \mathrm{clamp}(100 - k (T - T_0), 0, 100)$ is the temperature
/// score, $B$ biodiversity, $C$ the conflict index and $L$ civilization level.
#[derive(Debug, Clone, Default)]
pub struct EarthHealth {
    parameters: HealthParameters,
}

impl EarthHealth {
    pub fn new() -> Self {
        Self::from_parameters(HealthParameters::default())
    }

    pub fn from_parameters(parameters: HealthParameters) -> Self {
        Self { parameters }
    }

    pub fn temperature_score(&self, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        clamp_percent(100.0 - p.temperature_penalty * (temperature - p.baseline_temperature))
    }

    pub fn calculate(
        &self,
        temperature: FloatValue,
        biodiversity: FloatValue,
        conflict_index: FloatValue,
        civilization_level: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;
        let score = p.temperature_weight * self.temperature_score(temperature)
            + p.biodiversity_weight * biodiversity
            + p.peace_weight * (100.0 - conflict_index)
            + p.civilization_weight * civilization_level;
        round_to(clamp_percent(score), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_day() {
        // 30 + 21.6 + 16.6 + 10 = 78.2
        assert_eq!(EarthHealth::new().calculate(1.2, 72.0, 17.0, 50.0), 78.0);
    }

    #[test]
    fn test_temperature_score_clamped() {
        let component = EarthHealth::new();
        assert_eq!(component.temperature_score(-2.0), 100.0);
        assert_eq!(component.temperature_score(12.0), 0.0);
    }

    #[test]
    fn test_bounds() {
        let component = EarthHealth::new();
        assert_eq!(component.calculate(20.0, 5.0, 100.0, 0.0), 2.0);
        assert_eq!(component.calculate(-2.0, 100.0, 0.0, 100.0), 100.0);
    }
}
