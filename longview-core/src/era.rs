//! Era classification
//!
//! Every year of a projection belongs to exactly one of four epochs, keyed by
//! the elapsed offset since [`EPOCH_YEAR`](crate::EPOCH_YEAR). Lower bounds are
//! inclusive and upper bounds exclusive, so `2025 + 500` is already post-human.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{offset_of, Year};

/// Offset at which the post-human era begins.
pub const POST_HUMAN_START: Year = 500;
/// Offset at which the deep-civilization era begins.
pub const DEEP_CIVILIZATION_START: Year = 10_000;
/// Offset at which geological time begins.
pub const GEOLOGICAL_START: Year = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Era {
    /// Offsets 0 to 499
    Anthropocene,
    /// Offsets 500 to 9,999
    PostHuman,
    /// Offsets 10,000 to 99,999
    DeepCivilization,
    /// Offsets of 100,000 and beyond
    Geological,
}

impl Era {
    /// All eras in chronological order.
    pub const ALL: [Era; 4] = [
        Era::Anthropocene,
        Era::PostHuman,
        Era::DeepCivilization,
        Era::Geological,
    ];

    /// Classify an elapsed offset.
    ///
    /// Negative offsets lie before the projection and are reported as
    /// [`Era::Anthropocene`]; the time axis never produces them.
    pub fn from_offset(offset: Year) -> Self {
        if offset < POST_HUMAN_START {
            Era::Anthropocene
        } else if offset < DEEP_CIVILIZATION_START {
            Era::PostHuman
        } else if offset < GEOLOGICAL_START {
            Era::DeepCivilization
        } else {
            Era::Geological
        }
    }

    /// Classify an absolute year.
    pub fn from_year(year: Year) -> Self {
        Self::from_offset(offset_of(year))
    }

    /// Machine-readable tag, matching the serialised form.
    pub fn tag(&self) -> &'static str {
        match self {
            Era::Anthropocene => "anthropocene",
            Era::PostHuman => "post-human",
            Era::DeepCivilization => "deep-civilization",
            Era::Geological => "geological",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Era::Anthropocene => "Anthropocene",
            Era::PostHuman => "Post-Human Era",
            Era::DeepCivilization => "Deep Civilization",
            Era::Geological => "Geological Time",
        }
    }

    /// First offset belonging to this era.
    pub fn start_offset(&self) -> Year {
        match self {
            Era::Anthropocene => 0,
            Era::PostHuman => POST_HUMAN_START,
            Era::DeepCivilization => DEEP_CIVILIZATION_START,
            Era::Geological => GEOLOGICAL_START,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a year into its era tag and label.
pub fn classify(year: Year) -> (Era, &'static str) {
    let era = Era::from_year(year);
    (era, era.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPOCH_YEAR;

    #[test]
    fn test_epoch_is_anthropocene() {
        assert_eq!(Era::from_year(EPOCH_YEAR), Era::Anthropocene);
        assert_eq!(classify(EPOCH_YEAR), (Era::Anthropocene, "Anthropocene"));
    }

    #[test]
    fn test_boundaries_belong_to_next_era() {
        assert_eq!(Era::from_offset(499), Era::Anthropocene);
        assert_eq!(Era::from_offset(500), Era::PostHuman);
        assert_eq!(Era::from_offset(9_999), Era::PostHuman);
        assert_eq!(Era::from_offset(10_000), Era::DeepCivilization);
        assert_eq!(Era::from_offset(99_999), Era::DeepCivilization);
        assert_eq!(Era::from_offset(100_000), Era::Geological);
        assert_eq!(Era::from_offset(1_000_000), Era::Geological);
    }

    #[test]
    fn test_start_offsets_round_trip() {
        for era in Era::ALL {
            assert_eq!(Era::from_offset(era.start_offset()), era);
        }
    }

    #[test]
    fn test_serialised_tags() {
        for era in Era::ALL {
            let json = serde_json::to_string(&era).unwrap();
            assert_eq!(json, format!("\"{}\"", era.tag()));
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Era::PostHuman.to_string(), "Post-Human Era");
    }
}
