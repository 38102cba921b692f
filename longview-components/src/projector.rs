//! Per-point projector
//!
//! The projector evaluates every indicator at each generated time point.
//! Points are independent of one another: nothing carries over from one
//! year to the next, so a projection can be evaluated in any order and
//! in parallel without changing the output.
//!
//! Within a point the indicators are computed in a fixed order, because later
//! indicators read the rounded values of earlier ones:
//!
//! 1. temperature
//! 2. atmospheric CO₂
//! 3. sea level and ice coverage
//! 4. population
//! 5. GDP
//! 6. biodiversity
//! 7. conflict index
//! 8. civilization level
//! 9. earth health
//! 10. major event label

use longview_core::era::classify;
use longview_core::params::SimulationParams;
use longview_core::series::ProjectionSeries;
use longview_core::timepoints::generate_time_points;
use longview_core::year_data::YearData;
use longview_core::Year;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::biosphere::{Biodiversity, EarthHealth};
use crate::carbon::AtmosphericCO2;
use crate::climate::{GlobalTemperature, SeaIce};
use crate::drivers::{Drivers, PolicyFractions};
use crate::forcing::{astronomical_cycle, EventForcing, ExtinctionPulses, VolcanicCooling};
use crate::parameters::ProjectionCoefficients;
use crate::society::{Civilization, CollapseRisk, Conflict, Economy, Population};

/// Evaluates projections for a fixed coefficient table.
#[derive(Debug, Clone)]
pub struct Projector {
    coefficients: ProjectionCoefficients,
    temperature: GlobalTemperature,
    collapse: CollapseRisk,
    carbon: AtmosphericCO2,
    sea_ice: SeaIce,
    population: Population,
    economy: Economy,
    biodiversity: Biodiversity,
    conflict: Conflict,
    civilization: Civilization,
    health: EarthHealth,
    volcanic: VolcanicCooling,
    extinction: ExtinctionPulses,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new()
    }
}

impl Projector {
    /// Projector with the default coefficients and the shipped event catalogues.
    pub fn new() -> Self {
        Self::from_coefficients(ProjectionCoefficients::default())
    }

    pub fn from_coefficients(coefficients: ProjectionCoefficients) -> Self {
        Self {
            temperature: GlobalTemperature::from_parameters(coefficients.warming.clone()),
            collapse: CollapseRisk::from_parameters(coefficients.collapse.clone()),
            carbon: AtmosphericCO2::from_parameters(coefficients.carbon.clone()),
            sea_ice: SeaIce::from_parameters(coefficients.sea_ice.clone()),
            population: Population::from_parameters(coefficients.population.clone()),
            economy: Economy::from_parameters(coefficients.economy.clone()),
            biodiversity: Biodiversity::from_parameters(coefficients.biodiversity.clone()),
            conflict: Conflict::from_parameters(coefficients.conflict.clone()),
            civilization: Civilization::from_parameters(coefficients.civilization.clone()),
            health: EarthHealth::from_parameters(coefficients.health.clone()),
            volcanic: VolcanicCooling::new(),
            extinction: ExtinctionPulses::new(),
            coefficients,
        }
    }

    /// Replace the volcanic catalogue.
    pub fn with_volcanic(mut self, volcanic: VolcanicCooling) -> Self {
        self.volcanic = volcanic;
        self
    }

    /// Replace the extinction catalogue.
    pub fn with_extinction(mut self, extinction: ExtinctionPulses) -> Self {
        self.extinction = extinction;
        self
    }

    pub fn coefficients(&self) -> &ProjectionCoefficients {
        &self.coefficients
    }

    /// Shared intermediates for one time point.
    pub fn drivers(&self, params: &SimulationParams, year: Year) -> Drivers {
        let offset = Drivers::offset_for(year);
        let policy = PolicyFractions::from(params);

        let net_emission = self
            .temperature
            .net_emission(policy.co2_emission_rate, policy.renewable_adoption);
        let anthropogenic_warming = self.temperature.anthropogenic_warming(net_emission, offset);
        let collapse_probability = self
            .collapse
            .probability(policy.conflict_probability, anthropogenic_warming);
        let astronomical = if offset > self.coefficients.warming.astronomical_onset {
            astronomical_cycle(offset)
        } else {
            0.0
        };

        Drivers {
            year,
            offset,
            params: *params,
            policy,
            net_emission,
            anthropogenic_warming,
            collapse_probability,
            astronomical,
            volcanic: self.volcanic.evaluate(offset),
            extinction: self.extinction.evaluate(offset),
        }
    }

    /// Evaluate every indicator at a single year.
    ///
    /// Years outside the projection range are evaluated as-is; callers that
    /// take years from users should check them with
    /// [`validate_year`](longview_core::timepoints::validate_year) first.
    pub fn project_year(&self, params: &SimulationParams, year: Year) -> YearData {
        let drivers = self.drivers(params, year);

        let temperature = self.temperature.calculate(&drivers);
        let atmospheric_co2_ppm = self.carbon.calculate(
            drivers.net_emission,
            drivers.policy.renewable_adoption,
            drivers.offset,
        );
        let sea_level = self.sea_ice.sea_level(temperature, drivers.astronomical);
        let ice_coverage_percent = self.sea_ice.ice_coverage(temperature, drivers.astronomical);
        let population = self.population.calculate(&drivers, temperature);
        let gdp = self.economy.calculate(&drivers, temperature, population);
        let biodiversity = self.biodiversity.calculate(&drivers, temperature);
        let conflict_index = self.conflict.calculate(params, temperature);
        let civilization_level = self
            .civilization
            .calculate(&drivers, temperature, conflict_index);
        let earth_health_score =
            self.health
                .calculate(temperature, biodiversity, conflict_index, civilization_level);

        let major_event = drivers
            .volcanic
            .event
            .or(drivers.extinction.event)
            .map(str::to_string);
        let (era, era_label) = classify(year);

        YearData {
            year,
            temperature,
            gdp,
            population,
            biodiversity,
            earth_health_score,
            sea_level,
            conflict_index,
            ice_coverage_percent,
            atmospheric_co2_ppm,
            civilization_level,
            era,
            era_label: era_label.to_string(),
            major_event,
        }
    }

    /// Project every generated time point in order.
    pub fn project(&self, params: &SimulationParams) -> ProjectionSeries {
        let years = generate_time_points();
        info!(points = years.len(), "Running projection");
        let entries: Vec<YearData> = years
            .iter()
            .map(|&year| self.project_year(params, year))
            .collect();
        debug!(
            events = entries.iter().filter(|e| e.major_event.is_some()).count(),
            "Projection complete"
        );
        ProjectionSeries::new(entries)
    }

    /// Same output as [`Projector::project`], with points evaluated on the rayon pool.
    pub fn project_parallel(&self, params: &SimulationParams) -> ProjectionSeries {
        let years = generate_time_points();
        info!(points = years.len(), "Running parallel projection");
        let entries: Vec<YearData> = years
            .par_iter()
            .map(|&year| self.project_year(params, year))
            .collect();
        ProjectionSeries::new(entries)
    }
}

/// Project with the default coefficients.
pub fn project(params: &SimulationParams) -> ProjectionSeries {
    Projector::new().project(params)
}
