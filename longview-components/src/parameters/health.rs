use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Weights of the earth health score.
///
/// The temperature sub-score is `100 - temperature_penalty * (T - baseline)`,
/// kept within [0, 100]. The four weights sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthParameters {
    pub temperature_weight: FloatValue,
    pub biodiversity_weight: FloatValue,
    pub peace_weight: FloatValue,
    pub civilization_weight: FloatValue,
    pub baseline_temperature: FloatValue,
    pub temperature_penalty: FloatValue,
}

impl Default for HealthParameters {
    fn default() -> Self {
        Self {
            temperature_weight: 0.3,
            biodiversity_weight: 0.3,
            peace_weight: 0.2,
            civilization_weight: 0.2,
            baseline_temperature: 1.2,
            temperature_penalty: 18.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let p = HealthParameters::default();
        let total = p.temperature_weight + p.biodiversity_weight + p.peace_weight + p.civilization_weight;
        assert!((total - 1.0).abs() < 1e-12);
    }
}
