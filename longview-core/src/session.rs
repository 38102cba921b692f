//! Explicit session state.
//!
//! The timeline position, play/pause flag and the last finished projection are
//! plain values owned by the caller. A report view receives the last run as a
//! [`ProjectionRun`] handoff instead of reading shared storage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LongviewError, LongviewResult};
use crate::params::SimulationParams;
use crate::presentation::{slider_to_year, SLIDER_MAX};
use crate::series::ProjectionSeries;
use crate::year_data::YearData;
use crate::Year;

/// A finished projection together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRun {
    pub params: SimulationParams,
    pub series: ProjectionSeries,
}

impl ProjectionRun {
    pub fn new(params: SimulationParams, series: ProjectionSeries) -> Self {
        Self { params, series }
    }

    /// Serialise to JSON for handing over to another view or process.
    pub fn to_json(&self) -> LongviewResult<String> {
        serde_json::to_string(self).map_err(|e| LongviewError::Config(e.to_string()))
    }

    pub fn from_json(source: &str) -> LongviewResult<Self> {
        serde_json::from_str(source).map_err(|e| LongviewError::Config(e.to_string()))
    }
}

/// Timeline playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playback {
    /// Slider position in [0, 1000]
    pub slider: u16,
    pub playing: bool,
    /// Slider positions advanced per tick
    pub step: u16,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            slider: 0,
            playing: false,
            step: 5,
        }
    }
}

impl Playback {
    /// Advance by one step while playing. Playback stops at the end of the timeline.
    pub fn tick(self) -> Self {
        if !self.playing {
            return self;
        }
        let slider = self.slider.saturating_add(self.step).min(SLIDER_MAX);
        Self {
            slider,
            playing: slider < SLIDER_MAX,
            ..self
        }
    }

    /// Jump to a slider position, clamped to the timeline.
    pub fn seek(self, slider: u16) -> Self {
        Self {
            slider: slider.min(SLIDER_MAX),
            ..self
        }
    }

    /// Toggle play/pause. Starting from the end of the timeline rewinds first.
    pub fn toggle(self) -> Self {
        if self.playing {
            return Self {
                playing: false,
                ..self
            };
        }
        let slider = if self.slider >= SLIDER_MAX { 0 } else { self.slider };
        Self {
            slider,
            playing: true,
            ..self
        }
    }

    /// Year under the slider.
    pub fn current_year(&self) -> Year {
        slider_to_year(self.slider)
    }
}

/// Caller-owned state shared between the explorer and report views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    last_run: Option<ProjectionRun>,
    pub playback: Playback,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the last run.
    pub fn record(&mut self, run: ProjectionRun) {
        debug!(entries = run.series.len(), "Recording projection run");
        self.last_run = Some(run);
    }

    /// The last run, or [`LongviewError::NoProjection`] if none has been recorded.
    pub fn last_run(&self) -> LongviewResult<&ProjectionRun> {
        self.last_run.as_ref().ok_or(LongviewError::NoProjection)
    }

    /// Hand the last run over to another owner, leaving the session empty.
    pub fn take_run(&mut self) -> LongviewResult<ProjectionRun> {
        self.last_run.take().ok_or(LongviewError::NoProjection)
    }

    pub fn has_run(&self) -> bool {
        self.last_run.is_some()
    }

    /// Entry of the last run nearest to the playback year.
    pub fn current_entry(&self) -> LongviewResult<&YearData> {
        let run = self.last_run()?;
        run.series
            .nearest(self.playback.current_year())
            .ok_or(LongviewError::NoProjection)
    }
}
