//! Projection output and the read-only operations collaborators perform on it.
//!
//! A [`ProjectionSeries`] is produced fresh by every projection. Consumers look
//! up the entry nearest to a requested year, subsample the series for charting
//! and list the labelled events; nothing ever mutates an entry.

use serde::{Deserialize, Serialize};

use crate::year_data::YearData;
use crate::Year;

/// Ordered sequence of [`YearData`], strictly increasing by year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionSeries {
    entries: Vec<YearData>,
}

impl ProjectionSeries {
    /// Wrap entries produced by the projector.
    ///
    /// Panics if the entries are not strictly increasing by year, which would
    /// indicate a bug in the projector rather than bad input.
    pub fn new(entries: Vec<YearData>) -> Self {
        assert!(
            entries.windows(2).all(|w| w[0].year < w[1].year),
            "projection entries must be strictly increasing by year"
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearData> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[YearData] {
        &self.entries
    }

    pub fn first(&self) -> Option<&YearData> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&YearData> {
        self.entries.last()
    }

    pub fn into_inner(self) -> Vec<YearData> {
        self.entries
    }

    /// Entry whose year is closest to `year`.
    ///
    /// Ties resolve to the earlier entry. Returns `None` only for an empty series.
    pub fn nearest(&self, year: Year) -> Option<&YearData> {
        match self.entries.binary_search_by_key(&year, |entry| entry.year) {
            Ok(index) => self.entries.get(index),
            Err(0) => self.entries.first(),
            Err(index) if index == self.entries.len() => self.entries.last(),
            Err(index) => {
                let before = &self.entries[index - 1];
                let after = &self.entries[index];
                if year - before.year <= after.year - year {
                    Some(before)
                } else {
                    Some(after)
                }
            }
        }
    }

    /// Evenly strided subsample of at most `max_points` entries.
    ///
    /// The first and last entries are always kept when `max_points >= 2`.
    pub fn downsample(&self, max_points: usize) -> Vec<&YearData> {
        let len = self.entries.len();
        if max_points == 0 || len == 0 {
            return Vec::new();
        }
        if len <= max_points {
            return self.entries.iter().collect();
        }
        if max_points == 1 {
            return vec![&self.entries[0]];
        }

        let intervals = max_points - 1;
        (0..max_points)
            .map(|k| {
                let index = (k * (len - 1) + intervals / 2) / intervals;
                &self.entries[index]
            })
            .collect()
    }

    /// Years carrying a major event label, with the label.
    pub fn event_years(&self) -> Vec<(Year, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.major_event.as_deref().map(|name| (entry.year, name)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a YearData;
    type IntoIter = std::slice::Iter<'a, YearData>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::Era;

    fn entry(year: Year) -> YearData {
        let era = Era::from_year(year);
        YearData {
            year,
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
            era,
            era_label: era.label().to_string(),
            major_event: None,
        }
    }

    fn series(years: &[Year]) -> ProjectionSeries {
        ProjectionSeries::new(years.iter().copied().map(entry).collect())
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_rejects_unordered_entries() {
        series(&[2030, 2025]);
    }

    #[test]
    fn test_nearest() {
        let s = series(&[2025, 2030, 2040]);
        assert_eq!(s.nearest(2000).unwrap().year, 2025);
        assert_eq!(s.nearest(2030).unwrap().year, 2030);
        assert_eq!(s.nearest(2033).unwrap().year, 2030);
        assert_eq!(s.nearest(2036).unwrap().year, 2040);
        assert_eq!(s.nearest(3000).unwrap().year, 2040);
    }

    #[test]
    fn test_nearest_tie_prefers_earlier() {
        let s = series(&[2025, 2035]);
        assert_eq!(s.nearest(2030).unwrap().year, 2025);
    }

    #[test]
    fn test_nearest_empty() {
        assert!(ProjectionSeries::default().nearest(2025).is_none());
    }

    #[test]
    fn test_downsample_keeps_endpoints() {
        let years: Vec<Year> = (2025..2125).collect();
        let s = series(&years);
        let sampled = s.downsample(10);
        assert_eq!(sampled.len(), 10);
        assert_eq!(sampled.first().unwrap().year, 2025);
        assert_eq!(sampled.last().unwrap().year, 2124);
        assert!(sampled.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_downsample_small_limits() {
        let s = series(&[2025, 2026, 2027]);
        assert!(s.downsample(0).is_empty());
        assert_eq!(s.downsample(1).len(), 1);
        assert_eq!(s.downsample(2).iter().map(|e| e.year).collect::<Vec<_>>(), vec![2025, 2027]);
        assert_eq!(s.downsample(50).len(), 3);
    }

    #[test]
    fn test_event_years() {
        let mut entries: Vec<YearData> = [2025, 2026, 2027].into_iter().map(entry).collect();
        entries[1].major_event = Some("Test Event".to_string());
        let s = ProjectionSeries::new(entries);
        assert_eq!(s.event_years(), vec![(2026, "Test Event")]);
    }
}
