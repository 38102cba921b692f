//! Supervolcanic cooling
//!
//! Events are checked in catalogue order and the first one within range
//! determines the cooling. Two events closer than twice the cooling window
//! would therefore mask each other; [`VolcanicCooling::overlapping_windows`]
//! reports such pairs so a catalogue can be checked before use.

use longview_core::FloatValue;

use super::{EventForcing, EventSignal, ForcingEvent};

/// Half-width of the window in which an event cools the climate (yr).
pub const COOLING_WINDOW: FloatValue = 5_000.0;
/// e-folding distance of the cooling from the event peak (yr).
pub const COOLING_DECAY: FloatValue = 2_000.0;
/// Half-width of the window in which the event name is attached (yr).
pub const LABEL_WINDOW: FloatValue = 500.0;

/// Shipped catalogue; magnitudes are peak cooling in °C.
pub const VOLCANIC_EVENTS: [ForcingEvent; 4] = [
    ForcingEvent {
        name: "Campi Flegrei Caldera Eruption",
        offset: 12_000.0,
        magnitude: 1.5,
    },
    ForcingEvent {
        name: "Toba-Class Supereruption",
        offset: 40_000.0,
        magnitude: 3.0,
    },
    ForcingEvent {
        name: "Yellowstone Supervolcano Eruption",
        offset: 75_000.0,
        magnitude: 2.5,
    },
    ForcingEvent {
        name: "Siberian-Scale Flood Basalt Province",
        offset: 450_000.0,
        magnitude: 4.0,
    },
];

/// First-match volcanic cooling lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct VolcanicCooling {
    events: Vec<ForcingEvent>,
}

impl VolcanicCooling {
    /// Cooling from the shipped catalogue.
    pub fn new() -> Self {
        Self::with_events(VOLCANIC_EVENTS.to_vec())
    }

    pub fn with_events(events: Vec<ForcingEvent>) -> Self {
        Self { events }
    }

    /// Pairs of events whose cooling windows overlap.
    ///
    /// For any such pair the earlier entry in the catalogue suppresses the later
    /// one wherever both are in range.
    pub fn overlapping_windows(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        for (i, first) in self.events.iter().enumerate() {
            for second in &self.events[i + 1..] {
                if (first.offset - second.offset).abs() <= 2.0 * COOLING_WINDOW {
                    pairs.push((first.name, second.name));
                }
            }
        }
        pairs
    }
}

impl Default for VolcanicCooling {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForcing for VolcanicCooling {
    fn evaluate(&self, offset: FloatValue) -> EventSignal {
        for event in &self.events {
            let distance = (offset - event.offset).abs();
            if distance <= COOLING_WINDOW {
                return EventSignal {
                    magnitude: event.magnitude * (-distance / COOLING_DECAY).exp(),
                    event: (distance <= LABEL_WINDOW).then_some(event.name),
                };
            }
        }
        EventSignal::default()
    }

    fn events(&self) -> &[ForcingEvent] {
        &self.events
    }
}
