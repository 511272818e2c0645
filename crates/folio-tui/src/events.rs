//! UI event types.
//!
//! All inputs to the TUI (terminal input, resizes, fired timers) are
//! converted to `UiEvent` before being processed by the reducer.
//!
//! ## Timers
//!
//! The reducer never sleeps. It returns `UiEffect::Schedule` with a delay and
//! a [`Timer`]; the runtime sends the timer back into its inbox as
//! `UiEvent::Timer` once the delay has elapsed.

use crossterm::event::Event as CrosstermEvent;
use folio_core::typewriter::Tick;

use crate::state::SectionId;

/// Unified event enum for the TUI.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Initial load finished: starts the hero animation and the typewriter.
    Loaded,

    /// Terminal size, sent before other events whenever it changes.
    Frame { width: u16, height: u16 },

    /// Raw crossterm input.
    Terminal(CrosstermEvent),

    /// A timer scheduled by the reducer has fired.
    Timer(Timer),
}

/// Delayed events the reducer schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Next typewriter step.
    Typewriter(Tick),
    /// Staggered fade-in of the n-th hero element.
    HeroElement(usize),
    /// A section finished fading in.
    SectionFaded(SectionId),
    /// A carousel slide change finished; carries the transition id.
    CarouselSettled(u64),
}

impl From<Timer> for UiEvent {
    fn from(timer: Timer) -> Self {
        UiEvent::Timer(timer)
    }
}
