//! World GDP

use longview_core::utils::numeric::{excess_over, ramp, round_to};
use longview_core::{FloatValue, HORIZON_YEARS};

use crate::drivers::Drivers;
use crate::parameters::EconomyParameters;

/// GDP in trillion USD.
///
/// Before `rebase_onset` GDP compounds from the present-day baseline. After
/// it, GDP follows population and a multi-planetary technology multiplier,
/// scaled by `1 - collapse_drag * collapse_probability`.
#[derive(Debug, Clone, Default)]
pub struct Economy {
    parameters: EconomyParameters,
}

impl Economy {
    pub fn new() -> Self {
        Self::from_parameters(EconomyParameters::default())
    }

    pub fn from_parameters(parameters: EconomyParameters) -> Self {
        Self { parameters }
    }

    /// Annual growth rate during the compounding regime.
    pub fn growth_rate(&self, drivers: &Drivers, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let policy = &drivers.policy;
        let ai_boost =
            p.ai_boost * (1.0 - policy.ai_regulation) * ramp(drivers.offset, p.ai_ramp_years);
        let climate = p.climate_penalty * excess_over(temperature, p.climate_threshold);
        let conflict = p.conflict_penalty * policy.conflict_probability;
        p.expansion_rate * policy.economic_expansion + ai_boost - climate - conflict
    }

    /// GDP, floored at zero and rounded to one decimal.
    pub fn calculate(
        &self,
        drivers: &Drivers,
        temperature: FloatValue,
        population: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;
        let t = drivers.offset;

        let gdp = if t < p.rebase_onset {
            let years = t.min(p.compounding_years);
            let compounded = p.baseline * (1.0 + self.growth_rate(drivers, temperature)).powf(years);
            compounded.max(p.floor_fraction * p.baseline)
        } else {
            let normalised_time = t / HORIZON_YEARS as FloatValue;
            let technology = p.technology_multiplier
                * (1.0 + p.space_multiplier * drivers.policy.space_colonization * normalised_time);
            let civilization_factor = 1.0 - p.collapse_drag * drivers.collapse_probability;
            p.baseline * (population / p.baseline_population) * technology * civilization_factor
        };

        round_to(gdp.max(0.0), 1)
    }
}
