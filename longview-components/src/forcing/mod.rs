//! Natural forcing
//!
//! Parameter-free generators of long-period variability that no policy can
//! influence. Each is a pure function of the offset from the epoch:
//!
//! - `astronomical_cycle`: blended orbital cycles, a signed warm/cold phase
//! - `VolcanicCooling`: supervolcanic cooling pulses, first event in range wins
//! - `ExtinctionPulses`: biodiversity losses, all events in range are summed
//!
//! The two event models deliberately use different policies and are kept as
//! separate types behind the shared [`EventForcing`] trait.

mod astronomical;
mod extinction;
mod volcanic;

pub use astronomical::{astronomical_cycle, ORBITAL_CYCLES};
pub use extinction::{ExtinctionPulses, EXTINCTION_EVENTS};
pub use volcanic::{VolcanicCooling, VOLCANIC_EVENTS};

use longview_core::FloatValue;

/// A discrete, named event in a forcing catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcingEvent {
    pub name: &'static str,
    /// Offset from the epoch at which the event peaks (yr)
    pub offset: FloatValue,
    /// Peak magnitude, in the units of the forcing
    pub magnitude: FloatValue,
}

/// Output of an event forcing at one offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventSignal {
    /// Strength of the forcing (°C of cooling, or biodiversity points lost)
    pub magnitude: FloatValue,
    /// Name of the event close enough to the offset to be labelled
    pub event: Option<&'static str>,
}

/// A catalogue of discrete events evaluated at an offset.
pub trait EventForcing {
    fn evaluate(&self, offset: FloatValue) -> EventSignal;

    fn events(&self) -> &[ForcingEvent];
}
