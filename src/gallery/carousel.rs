// SPDX-License-Identifier: MPL-2.0
//! Auto-advancing carousel core shared by the lightbox and the testimonials.
//!
//! A carousel walks a fixed number of slides with wrap-around in both
//! directions. Manual navigation pauses auto-play; timer-driven advances go
//! through [`Carousel::tick`] and leave the auto-play flag untouched.

use super::timer::AutoAdvanceTimer;
use std::time::{Duration, Instant};

/// Index and auto-play state over `len` slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    auto_advancing: bool,
    timer: AutoAdvanceTimer,
}

impl Carousel {
    /// Creates a paused carousel positioned on the first slide.
    #[must_use]
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            auto_advancing: false,
            timer: AutoAdvanceTimer::new(interval),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advancing
    }

    #[must_use]
    pub fn timer(&self) -> &AutoAdvanceTimer {
        &self.timer
    }

    /// Enables auto-play, arming the timer from a full interval.
    pub fn play(&mut self, now: Instant) {
        if self.is_empty() {
            return;
        }
        self.auto_advancing = true;
        self.timer.arm(now);
    }

    /// Disables auto-play and cancels the pending advance.
    pub fn pause(&mut self) {
        self.auto_advancing = false;
        self.timer.cancel();
    }

    /// Flips auto-play. Returns the new state.
    pub fn toggle_auto_play(&mut self, now: Instant) -> bool {
        if self.auto_advancing {
            self.pause();
        } else {
            self.play(now);
        }
        self.auto_advancing
    }

    /// Manual step forward. Pauses auto-play.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.pause();
    }

    /// Manual step backward. Pauses auto-play.
    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.pause();
    }

    /// Manual jump. Out-of-range indices are rejected without any change.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.pause();
        true
    }

    /// Timer path: advances one slide when the interval has elapsed.
    ///
    /// Returns `true` when the index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.auto_advancing || self.is_empty() || !self.timer.poll(now) {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn starts_paused_on_first_slide() {
        let carousel = Carousel::new(3, INTERVAL);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.timer().is_armed());
    }

    #[test]
    fn next_wraps_after_len_steps() {
        let mut carousel = Carousel::new(4, INTERVAL);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let mut carousel = Carousel::new(4, INTERVAL);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn manual_navigation_pauses_auto_play() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, INTERVAL);

        carousel.play(now);
        carousel.next();
        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.timer().is_armed());

        carousel.play(now);
        carousel.previous();
        assert!(!carousel.is_auto_advancing());

        carousel.play(now);
        assert!(carousel.jump_to(2));
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn tick_advances_without_pausing() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, INTERVAL);
        carousel.play(now);

        assert!(!carousel.tick(now + INTERVAL / 2));
        assert!(carousel.tick(now + INTERVAL));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn tick_while_paused_does_nothing() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, INTERVAL);
        assert!(!carousel.tick(now + INTERVAL * 4));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn out_of_range_jump_is_rejected() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, INTERVAL);
        carousel.play(now);

        assert!(!carousel.jump_to(3));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn toggle_restarts_from_full_interval() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3, INTERVAL);
        carousel.play(now);

        let paused_at = now + Duration::from_millis(4000);
        assert!(!carousel.toggle_auto_play(paused_at));
        let resumed_at = now + Duration::from_millis(4500);
        assert!(carousel.toggle_auto_play(resumed_at));

        assert!(!carousel.tick(now + INTERVAL));
        assert!(carousel.tick(resumed_at + INTERVAL));
    }

    #[test]
    fn empty_carousel_ignores_everything() {
        let now = Instant::now();
        let mut carousel = Carousel::new(0, INTERVAL);
        carousel.play(now);
        carousel.next();
        carousel.previous();

        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.jump_to(0));
        assert!(!carousel.tick(now + INTERVAL));
        assert_eq!(carousel.index(), 0);
    }
}
