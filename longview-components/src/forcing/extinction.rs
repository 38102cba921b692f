//! Mass-extinction pulses
//!
//! Unlike volcanic cooling, every event within range contributes and the
//! contributions are summed.

use longview_core::FloatValue;

use super::{EventForcing, EventSignal, ForcingEvent};

/// Half-width of the window in which an event depresses biodiversity (yr).
pub const PULSE_WINDOW: FloatValue = 20_000.0;
/// e-folding distance of the penalty from the event peak (yr).
pub const PULSE_DECAY: FloatValue = 5_000.0;
/// Half-width of the window in which the event name is attached (yr).
pub const LABEL_WINDOW: FloatValue = 1_000.0;

/// Shipped catalogue; magnitudes are biodiversity index points lost at the peak.
pub const EXTINCTION_EVENTS: [ForcingEvent; 3] = [
    ForcingEvent {
        name: "Sixth Mass Extinction Culmination",
        offset: 50_000.0,
        magnitude: 25.0,
    },
    ForcingEvent {
        name: "Oceanic Anoxic Event",
        offset: 250_000.0,
        magnitude: 30.0,
    },
    ForcingEvent {
        name: "Near-Earth Gamma-Ray Burst",
        offset: 650_000.0,
        magnitude: 40.0,
    },
];

/// Summed extinction penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtinctionPulses {
    events: Vec<ForcingEvent>,
}

impl ExtinctionPulses {
    pub fn new() -> Self {
        Self::with_events(EXTINCTION_EVENTS.to_vec())
    }

    pub fn with_events(events: Vec<ForcingEvent>) -> Self {
        Self { events }
    }
}

impl Default for ExtinctionPulses {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForcing for ExtinctionPulses {
    fn evaluate(&self, offset: FloatValue) -> EventSignal {
        let mut signal = EventSignal::default();
        for event in &self.events {
            let distance = (offset - event.offset).abs();
            if distance > PULSE_WINDOW {
                continue;
            }
            signal.magnitude += event.magnitude * (-distance / PULSE_DECAY).exp();
            if signal.event.is_none() && distance <= LABEL_WINDOW {
                signal.event = Some(event.name);
            }
        }
        signal
    }

    fn events(&self) -> &[ForcingEvent] {
        &self.events
    }
}
