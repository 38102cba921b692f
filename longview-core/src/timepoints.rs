//! Time-point generator
//!
//! Projections are evaluated on a fixed, non-uniform set of years: one-year
//! steps through the first century, then progressively coarser steps out to
//! the end of the horizon.

use std::collections::BTreeSet;

use crate::errors::{LongviewError, LongviewResult};
use crate::{Year, EPOCH_YEAR, FINAL_YEAR, HORIZON_YEARS};

/// A contiguous range of offsets sampled at a constant step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionBand {
    /// First offset (inclusive)
    pub start: Year,
    /// Last offset (inclusive)
    pub end: Year,
    /// Step between samples
    pub step: Year,
}

/// Sampling schedule, in offsets from the epoch.
pub const RESOLUTION_BANDS: [ResolutionBand; 5] = [
    ResolutionBand {
        start: 0,
        end: 100,
        step: 1,
    },
    ResolutionBand {
        start: 100,
        end: 500,
        step: 10,
    },
    ResolutionBand {
        start: 500,
        end: 10_000,
        step: 100,
    },
    ResolutionBand {
        start: 10_000,
        end: 100_000,
        step: 500,
    },
    ResolutionBand {
        start: 100_000,
        end: HORIZON_YEARS,
        step: 5_000,
    },
];

/// Generate the strictly increasing list of years at which the model is evaluated.
///
/// The list depends on nothing but the schedule above, so every projection shares it.
pub fn generate_time_points() -> Vec<Year> {
    let mut offsets = BTreeSet::new();
    for band in RESOLUTION_BANDS {
        let mut offset = band.start;
        while offset <= band.end {
            offsets.insert(offset);
            offset += band.step;
        }
    }
    offsets.into_iter().map(|offset| EPOCH_YEAR + offset).collect()
}

/// Check that a year lies within the projection horizon.
pub fn validate_year(year: Year) -> LongviewResult<()> {
    if (EPOCH_YEAR..=FINAL_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(LongviewError::YearOutOfRange {
            year,
            min: EPOCH_YEAR,
            max: FINAL_YEAR,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let points = generate_time_points();
        assert_eq!(points.first(), Some(&EPOCH_YEAR));
        assert_eq!(points.last(), Some(&FINAL_YEAR));
    }

    #[test]
    fn test_strictly_increasing() {
        let points = generate_time_points();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_point_count() {
        // 101 + 40 + 95 + 180 + 180 once band boundaries are merged
        assert_eq!(generate_time_points().len(), 596);
    }

    #[test]
    fn test_band_steps() {
        let points = generate_time_points();
        let has = |offset: Year| points.binary_search(&(EPOCH_YEAR + offset)).is_ok();

        assert!(has(57));
        assert!(has(110));
        assert!(!has(105));
        assert!(has(600));
        assert!(!has(650));
        assert!(has(10_500));
        assert!(!has(10_600));
        assert!(has(105_000));
        assert!(!has(102_500));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_time_points(), generate_time_points());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(EPOCH_YEAR).is_ok());
        assert!(validate_year(FINAL_YEAR).is_ok());
        assert!(matches!(
            validate_year(EPOCH_YEAR - 1),
            Err(LongviewError::YearOutOfRange { year: 2024, .. })
        ));
        assert!(validate_year(FINAL_YEAR + 1).is_err());
    }
}
