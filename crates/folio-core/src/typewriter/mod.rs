//! Typewriter sequencer.
//!
//! Cycles through a fixed list of phrases, revealing each one a character at a
//! time into a [`TextSlot`], holding it, clearing it, and moving on. Forever.
//!
//! ## Module Structure
//!
//! - `phrases.rs`: `PhraseList` (non-empty, grapheme-indexed phrases)
//! - `slot.rs`: `TextSlot` trait and the `TypedText` slot used by the UI
//! - `scheduler.rs`: `Scheduler` trait, virtual-time and tokio implementations
//! - `sequencer.rs`: the state machine itself
//!
//! ## Driving
//!
//! The sequencer never sleeps. Every transition hands a [`Tick`] to the
//! scheduler together with a delay; whoever owns the scheduler calls
//! [`Sequencer::on_tick`] when the delay has elapsed. At most one tick is
//! outstanding per run.

mod phrases;
mod scheduler;
mod sequencer;
mod slot;

pub use phrases::{Phrase, PhraseList};
pub use scheduler::{Scheduler, TokioTimers, VirtualScheduler};
pub use sequencer::{Phase, Sequencer, Step, Tick, Timings};
pub use slot::{TextSlot, TypedText};
