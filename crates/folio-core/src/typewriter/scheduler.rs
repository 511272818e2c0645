//! Schedulers: fire-once delayed delivery of sequencer ticks.
//!
//! - [`VirtualScheduler`]: simulated clock, used by tests and `folio type --simulate`
//! - [`TokioTimers`]: real time, delivers events into an mpsc channel

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::sequencer::Tick;

/// Delayed-execution primitive the sequencer is driven by.
///
/// `schedule` must return immediately; the tick is handed back to
/// `Sequencer::on_tick` once `delay` has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick);
}

// ============================================================================
// Virtual time
// ============================================================================

/// Simulated clock with a queue of pending ticks.
///
/// Ticks fire in due-time order; ties fire in scheduling order.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, Tick)>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending tick.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pops the next tick due at or before `until`, moving the clock to it.
    pub fn pop_until(&mut self, until: Duration) -> Option<Tick> {
        let due = self.next_due()?;
        if due > until {
            return None;
        }
        let Reverse((due, _, tick)) = self.queue.pop()?;
        self.now = self.now.max(due);
        Some(tick)
    }

    /// Runs every tick due up to `until`, then parks the clock there.
    ///
    /// `fire` receives the scheduler back so it can schedule follow-ups;
    /// those are run too if they fall inside the window.
    pub fn advance_to<F>(&mut self, until: Duration, mut fire: F)
    where
        F: FnMut(Tick, &mut Self),
    {
        while let Some(tick) = self.pop_until(until) {
            fire(tick, self);
        }
        self.now = self.now.max(until);
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        self.queue.push(Reverse((self.now + delay, seq, tick)));
    }
}

// ============================================================================
// Real time (tokio)
// ============================================================================

/// Tokio-backed timers that deliver events into an unbounded channel.
///
/// Each scheduled item is a spawned sleep; all of them share one cancellation
/// token so pending timers can be dropped wholesale (shutdown, reset).
/// Requires a running tokio runtime.
#[derive(Debug)]
pub struct TokioTimers<E> {
    tx: mpsc::UnboundedSender<E>,
    cancel: CancellationToken,
}

impl<E> TokioTimers<E>
where
    E: Send + 'static,
{
    pub fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self {
            tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Sends `event` after `delay` unless cancelled first.
    pub fn send_after(&self, delay: Duration, event: E) {
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    let _ = tx.send(event);
                }
            }
        });
    }

    /// Cancels every pending timer. Later `send_after` calls still work.
    pub fn cancel_pending(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }
}

impl<E> Scheduler for TokioTimers<E>
where
    E: From<Tick> + Send + 'static,
{
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.send_after(delay, E::from(tick));
    }
}

impl<E> Drop for TokioTimers<E> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::Step;

    fn tick(step: Step) -> Tick {
        Tick::new(0, step)
    }

    #[test]
    fn test_virtual_fires_in_due_order() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(300), tick(Step::Release));
        clock.schedule(Duration::from_millis(100), tick(Step::Begin));
        clock.schedule(Duration::from_millis(100), tick(Step::Reveal));

        let mut fired = Vec::new();
        clock.advance_to(Duration::from_millis(1000), |t, clock| {
            fired.push((clock.now().as_millis(), t.step()));
        });

        assert_eq!(
            fired,
            vec![
                (100, Step::Begin),
                (100, Step::Reveal),
                (300, Step::Release)
            ]
        );
        assert_eq!(clock.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_virtual_runs_followups_inside_window() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(100), tick(Step::Reveal));

        let mut count = 0;
        clock.advance_to(Duration::from_millis(350), |t, clock| {
            count += 1;
            clock.schedule(Duration::from_millis(100), t);
        });

        // 100, 200, 300 fire; 400 stays pending.
        assert_eq!(count, 3);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn test_virtual_does_not_fire_early() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(500), tick(Step::Begin));
        assert!(clock.pop_until(Duration::from_millis(499)).is_none());
        assert!(clock.pop_until(Duration::from_millis(500)).is_some());
    }

    #[derive(Debug, PartialEq)]
    struct Fired(Tick);

    impl From<Tick> for Fired {
        fn from(tick: Tick) -> Self {
            Fired(tick)
        }
    }

    #[tokio::test]
    async fn test_tokio_timers_deliver_after_delay() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel::<Fired>();
        let mut timers = TokioTimers::new(tx);

        timers.schedule(Duration::from_millis(500), tick(Step::Begin));
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(501)).await;
        let fired = rx.recv().await.expect("timer should fire");
        assert_eq!(fired, Fired(tick(Step::Begin)));
    }

    #[tokio::test]
    async fn test_tokio_timers_cancel_pending() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel::<Fired>();
        let mut timers = TokioTimers::new(tx);

        timers.schedule(Duration::from_millis(100), tick(Step::Reveal));
        tokio::task::yield_now().await;
        timers.cancel_pending();
        timers.schedule(Duration::from_millis(200), tick(Step::Release));

        tokio::time::advance(Duration::from_millis(250)).await;
        let fired = rx.recv().await.expect("second timer should fire");
        assert_eq!(fired, Fired(tick(Step::Release)));
        assert!(rx.try_recv().is_err());
    }
}
