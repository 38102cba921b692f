//! Time axis, era partition and timeline navigation working together.

use longview_core::era::{Era, DEEP_CIVILIZATION_START, GEOLOGICAL_START, POST_HUMAN_START};
use longview_core::presentation::{format_year, slider_to_year, year_to_slider, YearFormat};
use longview_core::timepoints::{generate_time_points, validate_year};
use longview_core::{offset_of, EPOCH_YEAR, FINAL_YEAR};

#[test]
fn test_every_generated_year_has_exactly_one_era() {
    for year in generate_time_points() {
        let matching: Vec<Era> = Era::ALL
            .into_iter()
            .filter(|era| {
                let start = era.start_offset();
                let next = Era::ALL
                    .iter()
                    .map(|e| e.start_offset())
                    .filter(|&s| s > start)
                    .min()
                    .unwrap_or(i64::MAX);
                (start..next).contains(&offset_of(year))
            })
            .collect();
        assert_eq!(matching, vec![Era::from_year(year)], "year {}", year);
    }
}

#[test]
fn test_era_boundaries_are_sampled() {
    let points = generate_time_points();
    for (offset, era) in [
        (POST_HUMAN_START, Era::PostHuman),
        (DEEP_CIVILIZATION_START, Era::DeepCivilization),
        (GEOLOGICAL_START, Era::Geological),
    ] {
        let year = EPOCH_YEAR + offset;
        assert!(points.binary_search(&year).is_ok(), "{} not sampled", year);
        assert_eq!(Era::from_year(year), era);
    }
}

#[test]
fn test_slider_years_are_valid() {
    for slider in 0..=1000u16 {
        let year = slider_to_year(slider);
        assert!(validate_year(year).is_ok(), "slider {} -> {}", slider, year);
    }
    assert_eq!(slider_to_year(0), EPOCH_YEAR);
    assert_eq!(slider_to_year(1000), FINAL_YEAR);
}

#[test]
fn test_generated_points_map_into_slider_range() {
    for year in generate_time_points() {
        assert!(year_to_slider(year) <= 1000);
    }
}

#[test]
fn test_labels_for_generated_points() {
    for year in generate_time_points() {
        let compact = format_year(year, YearFormat::Compact);
        let full = format_year(year, YearFormat::Full);
        assert!(!compact.is_empty());
        if offset_of(year) >= 1_000 {
            assert!(compact.starts_with('+'), "{}", compact);
            assert!(full.ends_with("years"), "{}", full);
        }
    }
}
