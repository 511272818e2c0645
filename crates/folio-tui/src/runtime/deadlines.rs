//! Due times of scheduled timers, so terminal polling wakes up for them.
//!
//! `crossterm::event::poll` cannot be woken by the inbox. Capping the poll at
//! the next due time keeps the typewriter on its configured interval instead
//! of drifting by up to one frame per character.

use std::time::{Duration, Instant};

/// Poll length while a timer is due but its event has not arrived yet.
const DELIVERY_SLACK: Duration = Duration::from_millis(1);

/// Due times older than this are forgotten even if nothing arrived.
const STALE_AFTER: Duration = Duration::from_millis(250);

#[derive(Debug, Default)]
pub struct Deadlines {
    due: Vec<Instant>,
}

impl Deadlines {
    pub fn push(&mut self, due: Instant) {
        let at = self.due.partition_point(|d| *d <= due);
        self.due.insert(at, due);
    }

    /// A timer event was delivered; forgets the earliest due time.
    pub fn delivered(&mut self) {
        if !self.due.is_empty() {
            self.due.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.due.clear();
    }

    /// How long to poll the terminal, at most `limit`.
    pub fn poll_timeout(&mut self, now: Instant, limit: Duration) -> Duration {
        self.due.retain(|due| now.saturating_duration_since(*due) < STALE_AFTER);
        match self.due.first() {
            Some(due) if *due <= now => DELIVERY_SLACK.min(limit),
            Some(due) => limit.min(*due - now),
            None => limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: Duration = Duration::from_millis(100);

    #[test]
    fn test_poll_stops_at_next_due_time() {
        let now = Instant::now();
        let mut deadlines = Deadlines::default();
        deadlines.push(now + Duration::from_millis(40));
        deadlines.push(now + Duration::from_millis(5));

        assert_eq!(deadlines.poll_timeout(now, LIMIT), Duration::from_millis(5));
        deadlines.delivered();
        assert_eq!(deadlines.poll_timeout(now, LIMIT), Duration::from_millis(40));
        deadlines.delivered();
        assert_eq!(deadlines.poll_timeout(now, LIMIT), LIMIT);
    }

    #[test]
    fn test_overdue_timer_polls_briefly() {
        let now = Instant::now();
        let mut deadlines = Deadlines::default();
        deadlines.push(now);
        assert_eq!(
            deadlines.poll_timeout(now + Duration::from_millis(2), LIMIT),
            DELIVERY_SLACK
        );
    }

    #[test]
    fn test_stale_and_cleared_times_are_dropped() {
        let now = Instant::now();
        let mut deadlines = Deadlines::default();
        deadlines.push(now);
        assert_eq!(deadlines.poll_timeout(now + STALE_AFTER, LIMIT), LIMIT);

        deadlines.push(now + Duration::from_millis(10));
        deadlines.clear();
        assert_eq!(deadlines.poll_timeout(now, LIMIT), LIMIT);
    }
}
