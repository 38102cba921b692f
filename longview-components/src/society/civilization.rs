use longview_core::utils::numeric::{clamp_percent, excess_over, round_to};
use longview_core::FloatValue;

use crate::drivers::Drivers;
use crate::parameters::CivilizationParameters;

/// Civilization level in [0, 100].
#[derive(Debug, Clone, Default)]
pub struct Civilization {
    parameters: CivilizationParameters,
}

impl Civilization {
    pub fn new() -> Self {
        Self::from_parameters(CivilizationParameters::default())
    }

    pub fn from_parameters(parameters: CivilizationParameters) -> Self {
        Self { parameters }
    }

    /// Technology progress after the near-term regime, capped at `technology_cap`.
    pub fn technology_progress(&self, offset: FloatValue, space: FloatValue) -> FloatValue {
        let p = &self.parameters;
        if offset <= p.near_term_years {
            return 0.0;
        }
        let progress = (offset / p.near_term_years).ln() / p.technology_log_span.ln();
        (p.technology_cap * (space + p.technology_base_factor) * progress).min(p.technology_cap)
    }

    pub fn calculate(
        &self,
        drivers: &Drivers,
        temperature: FloatValue,
        conflict_index: FloatValue,
    ) -> FloatValue {
        let p = &self.parameters;

        let level = if drivers.offset < p.near_term_years {
            p.baseline
                + p.economy_weight
                    * (drivers.params.economic_expansion as FloatValue - p.economy_reference)
                + p.renewable_weight
                    * (drivers.params.renewable_adoption as FloatValue - p.renewable_reference)
        } else {
            let decline = p.conflict_decline * conflict_index
                + p.heat_decline * excess_over(temperature, p.heat_threshold)
                + p.collapse_decline * drivers.collapse_probability;
            p.baseline
                + self.technology_progress(drivers.offset, drivers.policy.space_colonization)
                - decline
        };

        round_to(clamp_percent(level), 0)
    }
}
