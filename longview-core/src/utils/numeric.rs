//! Small numeric helpers shared by the projection formulas.

use crate::FloatValue;

/// Round to a fixed number of decimal places, half away from zero.
pub fn round_to(value: FloatValue, decimals: i32) -> FloatValue {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Linear ramp from 0 at `elapsed = 0` to 1 at `elapsed >= window`.
///
/// Negative elapsed times give 0.
pub fn ramp(elapsed: FloatValue, window: FloatValue) -> FloatValue {
    (elapsed / window).clamp(0.0, 1.0)
}

/// Clamp a percentage-typed value to [0, 100].
pub fn clamp_percent(value: FloatValue) -> FloatValue {
    value.clamp(0.0, 100.0)
}

/// Positive part of `value - threshold`.
pub fn excess_over(value: FloatValue, threshold: FloatValue) -> FloatValue {
    (value - threshold).max(0.0)
}
