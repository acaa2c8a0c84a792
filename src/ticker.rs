use std::time::{Duration, Instant};

/// Fixed-period tick scheduler driven by caller-supplied instants.
///
/// Falling behind by several periods yields one tick and re-anchors the
/// schedule instead of firing a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Starts a schedule whose first tick is one interval after `now`.
    #[must_use]
    pub fn start(interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns true when a tick is due at `now`, and schedules the next one.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    /// Time left until the next tick; zero if one is already due.
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Pushes the next tick a full interval past `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}
