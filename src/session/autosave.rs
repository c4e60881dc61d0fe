//! Fixed-interval auto-save timer.

use std::time::{Duration, Instant};

/// Fires once per interval of wall-clock time.
///
/// The timer does not run anything itself; the owner polls it from its
/// loop and performs the save when [`AutoSaveTimer::poll`] returns true.
/// A late poll fires once, not once per missed interval.
#[derive(Debug, Clone)]
pub struct AutoSaveTimer {
    interval: Duration,
    next_due: Instant,
}

impl AutoSaveTimer {
    /// Creates a timer whose first tick is one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a tick is due at `now`, and re-arms for the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Pushes the next tick to one interval after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// Time left until the next tick, zero if overdue.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
