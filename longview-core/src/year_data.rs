use serde::{Deserialize, Serialize};

use crate::era::Era;
use crate::standard_variables::Indicator;
use crate::{FloatValue, Year};

/// Snapshot of every indicator at one time point.
///
/// Values are clamped and rounded by the projector before the record is
/// built, so formatting the same entry twice always gives the same digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    pub year: Year,
    /// °C anomaly, 2 dp, at least -2
    pub temperature: FloatValue,
    /// Trillion USD, 1 dp
    pub gdp: FloatValue,
    /// Billions, 2 dp, at least 0.01
    pub population: FloatValue,
    /// Whole number in [5, 100]
    pub biodiversity: FloatValue,
    /// Whole number in [0, 100]
    pub earth_health_score: FloatValue,
    /// Metres relative to present, 2 dp
    pub sea_level: FloatValue,
    /// Whole number in [0, 100]
    pub conflict_index: FloatValue,
    /// Percent, 1 dp, in [0, 100]
    pub ice_coverage_percent: FloatValue,
    /// Whole ppm, at least 250
    #[serde(rename = "atmosphericCO2ppm")]
    pub atmospheric_co2_ppm: FloatValue,
    /// Whole number in [0, 100]
    pub civilization_level: FloatValue,
    pub era: Era,
    pub era_label: String,
    /// Dominant discrete event active at this point, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub major_event: Option<String>,
}

impl YearData {
    /// Value of a single indicator.
    pub fn value(&self, indicator: Indicator) -> FloatValue {
        match indicator {
            Indicator::Temperature => self.temperature,
            Indicator::Gdp => self.gdp,
            Indicator::Population => self.population,
            Indicator::Biodiversity => self.biodiversity,
            Indicator::EarthHealth => self.earth_health_score,
            Indicator::SeaLevel => self.sea_level,
            Indicator::ConflictIndex => self.conflict_index,
            Indicator::IceCoverage => self.ice_coverage_percent,
            Indicator::AtmosphericCO2 => self.atmospheric_co2_ppm,
            Indicator::CivilizationLevel => self.civilization_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> YearData {
        YearData {
            year: 2025,
            temperature: 1.2,
            gdp: 105.0,
            population: 8.1,
            biodiversity: 72.0,
            earth_health_score: 78.0,
            sea_level: 0.0,
            conflict_index: 17.0,
            ice_coverage_percent: 12.0,
            atmospheric_co2_ppm: 421.0,
            civilization_level: 50.0,
            era: Era::Anthropocene,
            era_label: "Anthropocene".to_string(),
            major_event: None,
        }
    }

    #[test]
    fn test_value_accessor() {
        let data = sample();
        assert_eq!(data.value(Indicator::Temperature), 1.2);
        assert_eq!(data.value(Indicator::AtmosphericCO2), 421.0);
        assert_eq!(data.value(Indicator::CivilizationLevel), 50.0);
    }

    #[test]
    fn test_serialised_keys_match_indicator_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        for indicator in Indicator::ALL {
            let key = indicator.definition().key;
            assert!(object.contains_key(key), "Missing key {}", key);
        }
        assert_eq!(object["era"], "anthropocene");
        assert!(!object.contains_key("majorEvent"));
    }

    #[test]
    fn test_major_event_serialised_when_present() {
        let data = YearData {
            major_event: Some("Yellowstone Supervolcano Eruption".to_string()),
            ..sample()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"majorEvent\":\"Yellowstone Supervolcano Eruption\""));
        let parsed: YearData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
