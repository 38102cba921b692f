use longview_core::FloatValue;

use crate::parameters::CollapseParameters;

/// Probability of civilization collapse, in [0, 0.8] with default parameters.
#[derive(Debug, Clone, Default)]
pub struct CollapseRisk {
    parameters: CollapseParameters,
}

impl CollapseRisk {
    pub fn new() -> Self {
        Self::from_parameters(CollapseParameters::default())
    }

    pub fn from_parameters(parameters: CollapseParameters) -> Self {
        Self { parameters }
    }

    /// # Arguments
    ///
    /// * `conflict` - Conflict probability as a fraction
    /// * `anthropogenic_warming` - Anomaly before any cooling (°C)
    pub fn probability(&self, conflict: FloatValue, anthropogenic_warming: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let runaway = if anthropogenic_warming > p.runaway_threshold {
            p.runaway_penalty
        } else {
            0.0
        };
        p.conflict_weight * conflict + runaway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_conflict_only() {
        let risk = CollapseRisk::new();
        assert!(is_close!(risk.probability(0.3, 1.2), 0.12));
    }

    #[test]
    fn test_runaway_warming() {
        let risk = CollapseRisk::new();
        assert!(is_close!(risk.probability(1.0, 4.01), 0.8));
        // The threshold itself is not runaway
        assert!(is_close!(risk.probability(0.0, 4.0), 0.0));
    }
}
