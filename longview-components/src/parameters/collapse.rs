use longview_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the civilization collapse probability.
///
/// $$p = w_c \cdot c + \begin{cases} p_r & T_{anthro} > T_r \\ 0 & \text{otherwise} \end{cases}$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseParameters {
    /// Weight of the conflict probability.
    /// Default: 0.4
    pub conflict_weight: FloatValue,
    /// Anthropogenic warming above which runaway warming adds to the risk (°C).
    /// Default: 4.0
    pub runaway_threshold: FloatValue,
    /// Added probability under runaway warming.
    /// Default: 0.4
    pub runaway_penalty: FloatValue,
}

impl Default for CollapseParameters {
    fn default() -> Self {
        Self {
            conflict_weight: 0.4,
            runaway_threshold: 4.0,
            runaway_penalty: 0.4,
        }
    }
}
