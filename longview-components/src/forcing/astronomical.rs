use longview_core::FloatValue;
use std::f64::consts::TAU;

/// Orbital cycles as (period in years, weight): eccentricity, obliquity, precession.
pub const ORBITAL_CYCLES: [(FloatValue, FloatValue); 3] =
    [(100_000.0, 0.5), (41_000.0, 0.3), (23_000.0, 0.2)];

/// Blended astronomical cycle at an offset, in [-1, 1].
///
/// Positive values are warm phases, negative values glacial phases. The
/// weights sum to one, so the signal peaks at exactly 1 at offset 0.
pub fn astronomical_cycle(offset: FloatValue) -> FloatValue {
    ORBITAL_CYCLES
        .iter()
        .map(|(period, weight)| weight * (TAU * offset / period).cos())
        .sum()
}
