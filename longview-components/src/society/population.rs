//! Total population
//!
//! # Regimes
//!
//! - **Near term**: linear growth from the present-day baseline, damped by heat
//!   stress (never below `stress_floor` of nominal growth).
//! - **Long term**: logistic approach from the end of the near-term regime to
//!   a carrying capacity. A likely collapse applies a crash that recovers with
//!   a fixed half-life, and off-world settlements add population in
//!   proportion to space colonization and elapsed time.

use longview_core::utils::numeric::{excess_over, round_to};
use longview_core::{FloatValue, HORIZON_YEARS};

use crate::drivers::Drivers;
use crate::parameters::PopulationParameters;

#[derive(Debug, Clone, Default)]
pub struct Population {
    parameters: PopulationParameters,
}

impl Population {
    pub fn new() -> Self {
        Self::from_parameters(PopulationParameters::default())
    }

    pub fn from_parameters(parameters: PopulationParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &PopulationParameters {
        &self.parameters
    }

    /// Growth damping from heat stress, in [stress_floor, 1].
    pub fn stress_factor(&self, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        (1.0 - p.stress_per_degree * excess_over(temperature, p.stress_threshold)).max(p.stress_floor)
    }

    /// Near-term population after `years` of growth.
    pub fn near_term(&self, growth: FloatValue, years: FloatValue, stress: FloatValue) -> FloatValue {
        let p = &self.parameters;
        p.baseline * (1.0 + p.growth_per_year * growth * years * stress)
    }

    /// Carrying capacity (billion), never below `capacity_floor`.
    pub fn carrying_capacity(&self, renewable: FloatValue, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        (p.capacity_base + p.capacity_renewable * renewable
            - p.capacity_per_degree * excess_over(temperature, p.stress_threshold))
        .max(p.capacity_floor)
    }

    /// Population (billion), floored and rounded to two decimals.
    pub fn calculate(&self, drivers: &Drivers, temperature: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let t = drivers.offset;
        let policy = &drivers.policy;
        let stress = self.stress_factor(temperature);

        let population = if t < p.near_term_years {
            self.near_term(policy.population_growth, t, stress)
        } else {
            let capacity = self.carrying_capacity(policy.renewable_adoption, temperature);
            let start = self.near_term(policy.population_growth, p.near_term_years, stress);
            let rate = p.logistic_rate * (p.logistic_rate_offset + policy.population_growth);
            let logistic = capacity
                / (1.0 + (capacity - start) / start * (-rate * (t - p.near_term_years)).exp());

            let envelope = if drivers.collapse_probability > p.collapse_threshold
                && t > p.collapse_onset
            {
                let remaining = 0.5f64.powf((t - p.collapse_onset) / p.recovery_half_life);
                1.0 - drivers.collapse_probability * remaining
            } else {
                1.0
            };

            let off_world =
                t / HORIZON_YEARS as FloatValue * p.off_world_scale * policy.space_colonization;

            logistic * envelope + off_world
        };

        round_to(population.max(p.floor), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_stress_factor() {
        let component = Population::new();
        assert_eq!(component.stress_factor(1.2), 1.0);
        assert!(is_close!(component.stress_factor(3.5), 0.8));
        assert!(is_close!(component.stress_factor(12.0), 0.6));
    }

    #[test]
    fn test_near_term_growth() {
        let component = Population::new();
        assert!(is_close!(component.near_term(0.5, 0.0, 1.0), 8.1));
        // 0.5% per year at full growth for 200 years doubles the population
        assert!(is_close!(component.near_term(1.0, 200.0, 1.0), 16.2));
        assert!(is_close!(component.near_term(0.0, 200.0, 1.0), 8.1));
    }

    #[test]
    fn test_carrying_capacity() {
        let component = Population::new();
        assert!(is_close!(component.carrying_capacity(0.5, 1.5), 16.0));
        assert!(is_close!(component.carrying_capacity(0.0, 3.5), 7.0));
        assert_eq!(component.carrying_capacity(0.0, 20.0), 1.0);
    }
}
