// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-advance timer.
//!
//! The timer does not run on its own: the application feeds it the current
//! instant on every poll tick and it reports whether a full interval elapsed.
//! Arming always starts from a full interval, and cancelling invalidates the
//! pending deadline so a late poll can never fire.

use std::time::{Duration, Instant};

/// Scheduled-task handle owned by a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvanceTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvanceTimer {
    /// Creates a cancelled timer with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms (or re-arms) the timer so it fires one full interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancels any pending fire. Cancelling a cancelled timer is a no-op.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a fire is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Instant of the next fire, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Checks the timer against `now`.
    ///
    /// Returns `true` at most once per elapsed deadline and schedules the next
    /// fire a full interval after `now`, so a stalled event loop produces a
    /// single advance instead of a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
