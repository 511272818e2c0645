//! Typewriter state machine.
//!
//! ```text
//!            start()/notify_visible()
//!   Idle ──────────────────────────────▶ (startup delay) ──Begin──▶ Typing
//!                                                                   │  ▲
//!                                                            Reveal │  │ Begin (after gap)
//!                                                                   ▼  │
//!                                     Holding ──Release──▶ Clearing ───┘
//! ```
//!
//! Every arrow out of a state is a [`Tick`] that was handed to the scheduler.
//! A missing text slot at any tick aborts the run (back to `Idle`,
//! `running = false`) without touching `phrase_index`.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::phrases::PhraseList;
use super::scheduler::Scheduler;
use super::slot::TextSlot;

/// Fixed timings of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between two revealed characters.
    pub typing_interval: Duration,
    /// Dwell time with the full phrase displayed.
    pub hold: Duration,
    /// Blank gap between clearing a phrase and typing the next one.
    pub gap: Duration,
    /// Delay between `start()` and the first reveal step.
    pub startup_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(100),
            hold: Duration::from_millis(10_000),
            gap: Duration::from_millis(500),
            startup_delay: Duration::from_millis(500),
        }
    }
}

/// Logical state of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// `char_index` graphemes of the current phrase are on screen.
    Typing { char_index: usize },
    Holding,
    Clearing,
}

/// What a scheduled tick asks the sequencer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Start typing the current phrase from its first character.
    Begin,
    /// Reveal the next character.
    Reveal,
    /// Dwell expired; clear and advance.
    Release,
}

/// A scheduled step, stamped with the run it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick {
    epoch: u64,
    step: Step,
}

impl Tick {
    pub fn new(epoch: u64, step: Step) -> Self {
        Self { epoch, step }
    }

    pub fn step(self) -> Step {
        self.step
    }

    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// Outcome of a transition.
enum Next {
    Schedule(Duration, Step),
    Done,
}

/// The typewriter sequencer.
///
/// `running` is a cooperative re-entrancy guard: at most one tick chain is
/// alive, so `start()` while running does nothing. Internal state is
/// readable but only mutated through `start`, `notify_visible` and `on_tick`.
#[derive(Debug, Clone)]
pub struct Sequencer {
    phrases: PhraseList,
    timings: Timings,
    phrase_index: usize,
    phase: Phase,
    running: bool,
    /// Bumped on every start; ticks from older runs are dropped.
    epoch: u64,
    cycles: u64,
}

impl Sequencer {
    pub fn new(phrases: PhraseList, timings: Timings) -> Self {
        Self {
            phrases,
            timings,
            phrase_index: 0,
            phase: Phase::Idle,
            running: false,
            epoch: 0,
            cycles: 0,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Characters revealed of the current phrase (0 outside Typing/Holding).
    pub fn char_index(&self) -> usize {
        match self.phase {
            Phase::Typing { char_index } => char_index,
            Phase::Holding => self.phrases.get(self.phrase_index).len(),
            Phase::Idle | Phase::Clearing => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of phrases fully shown and cleared since creation.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Arms the sequencer. No-op (returns false) if already running.
    ///
    /// The slot is made visible now if present; its absence is only noticed
    /// at the first step, which then aborts.
    pub fn start<T, S>(&mut self, slot: Option<&mut T>, scheduler: &mut S) -> bool
    where
        T: TextSlot + ?Sized,
        S: Scheduler + ?Sized,
    {
        if self.running {
            return false;
        }
        self.running = true;
        self.phase = Phase::Idle;
        self.epoch = self.epoch.wrapping_add(1);

        if let Some(slot) = slot {
            slot.set_visible(true);
            slot.set_cursor_visible(true);
        }

        info!(
            phrase_index = self.phrase_index,
            epoch = self.epoch,
            "typewriter started"
        );
        scheduler.schedule(
            self.timings.startup_delay,
            Tick::new(self.epoch, Step::Begin),
        );
        true
    }

    /// Host region became substantially visible. Same as [`start`](Self::start).
    pub fn notify_visible<T, S>(&mut self, slot: Option<&mut T>, scheduler: &mut S) -> bool
    where
        T: TextSlot + ?Sized,
        S: Scheduler + ?Sized,
    {
        self.start(slot, scheduler)
    }

    /// Handles a tick previously handed to `scheduler`.
    pub fn on_tick<T, S>(&mut self, tick: Tick, slot: Option<&mut T>, scheduler: &mut S)
    where
        T: TextSlot + ?Sized,
        S: Scheduler + ?Sized,
    {
        if !self.running || tick.epoch != self.epoch {
            debug!(?tick, epoch = self.epoch, "stale typewriter tick dropped");
            return;
        }

        let Some(slot) = slot else {
            warn!(
                phrase_index = self.phrase_index,
                "text slot unavailable; typewriter aborted"
            );
            self.running = false;
            self.phase = Phase::Idle;
            return;
        };

        match self.transition(tick.step, slot) {
            Next::Schedule(delay, step) => {
                scheduler.schedule(delay, Tick::new(self.epoch, step));
            }
            Next::Done => {}
        }
    }

    /// Transition table. Unexpected (phase, step) pairs are ignored.
    fn transition<T>(&mut self, step: Step, slot: &mut T) -> Next
    where
        T: TextSlot + ?Sized,
    {
        let phrase = self.phrases.get(self.phrase_index);
        match (self.phase, step) {
            (Phase::Idle | Phase::Clearing, Step::Begin) => {
                slot.set_visible(true);
                slot.set_cursor_visible(true);
                slot.set_text("");
                debug!(phrase_index = self.phrase_index, "typing");
                if phrase.is_empty() {
                    self.phase = Phase::Holding;
                    Next::Schedule(self.timings.hold, Step::Release)
                } else {
                    self.phase = Phase::Typing { char_index: 0 };
                    Next::Schedule(self.timings.typing_interval, Step::Reveal)
                }
            }
            (Phase::Typing { char_index }, Step::Reveal) => {
                let char_index = (char_index + 1).min(phrase.len());
                slot.set_text(phrase.prefix(char_index));
                if char_index == phrase.len() {
                    debug!(phrase_index = self.phrase_index, "holding");
                    self.phase = Phase::Holding;
                    Next::Schedule(self.timings.hold, Step::Release)
                } else {
                    self.phase = Phase::Typing { char_index };
                    Next::Schedule(self.timings.typing_interval, Step::Reveal)
                }
            }
            (Phase::Holding, Step::Release) => {
                slot.set_text("");
                slot.set_cursor_visible(false);
                self.phase = Phase::Clearing;
                self.phrase_index = self.phrases.next_index(self.phrase_index);
                self.cycles += 1;
                debug!(next_index = self.phrase_index, "clearing");
                Next::Schedule(self.timings.gap, Step::Begin)
            }
            (phase, step) => {
                debug!(?phase, ?step, "typewriter tick ignored in this phase");
                Next::Done
            }
        }
    }
}
