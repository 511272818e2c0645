//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent timers and I/O only, never direct UI mutations, which keeps
//! the reducer pure and testable without a terminal or a clock.

use std::time::Duration;

use folio_core::typewriter::{Scheduler, Tick};

use crate::events::Timer;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Deliver `UiEvent::Timer(timer)` after `delay`.
    Schedule { delay: Duration, timer: Timer },

    /// Open a URL with the system opener (best effort).
    OpenUrl { url: String },
}

/// Adapts an effect list to the sequencer's [`Scheduler`] seam.
///
/// Typewriter ticks become `Schedule` effects, so the sequencer can run
/// inside the reducer.
pub struct EffectScheduler<'a> {
    effects: &'a mut Vec<UiEffect>,
}

impl<'a> EffectScheduler<'a> {
    pub fn new(effects: &'a mut Vec<UiEffect>) -> Self {
        Self { effects }
    }
}

impl Scheduler for EffectScheduler<'_> {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.effects.push(UiEffect::Schedule {
            delay,
            timer: Timer::Typewriter(tick),
        });
    }
}

#[cfg(test)]
mod tests {
    use folio_core::typewriter::{Step, TokioTimers};
    use tokio::sync::mpsc;

    use super::*;
    use crate::events::UiEvent;

    #[test]
    fn test_sequencer_ticks_become_schedule_effects() {
        let mut effects = Vec::new();
        let tick = Tick::new(3, Step::Reveal);
        EffectScheduler::new(&mut effects).schedule(Duration::from_millis(100), tick);
        assert_eq!(
            effects,
            vec![UiEffect::Schedule {
                delay: Duration::from_millis(100),
                timer: Timer::Typewriter(tick),
            }]
        );
    }

    /// The runtime executes `Schedule` by handing the timer to `TokioTimers`.
    #[tokio::test(start_paused = true)]
    async fn test_scheduled_timer_arrives_in_inbox() {
        let (tx, mut rx) = mpsc::unbounded_channel::<UiEvent>();
        let timers = TokioTimers::new(tx);
        timers.send_after(
            Duration::from_millis(300),
            UiEvent::Timer(Timer::CarouselSettled(7)),
        );

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(
            rx.try_recv(),
            Ok(UiEvent::Timer(Timer::CarouselSettled(7)))
        ));
    }
}
