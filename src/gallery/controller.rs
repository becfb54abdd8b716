// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the only code that mutates gallery state.
//!
//! The controller owns which collection is open, the active image, and the
//! auto-advance timer. While open it also holds a scroll guard so the page
//! behind the overlay stays put. It does not render anything; the lightbox
//! view reads its state through the accessors below.

use super::carousel::Carousel;
use super::collections::GalleryCollections;
use super::scroll_lock::{ScrollGuard, ScrollLock};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Snapshot of the gallery state, mostly useful for assertions and logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryState {
    pub is_open: bool,
    pub active_collection_key: Option<String>,
    pub active_index: usize,
    pub is_auto_advancing: bool,
}

/// Messages accepted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the collection with this key.
    Open(String),
    Close,
    Next,
    Previous,
    /// Thumbnail click.
    JumpTo(usize),
    ToggleAutoPlay,
    /// Timer poll from the application tick subscription.
    Tick(Instant),
}

/// Effects reported back to the owning screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened { key: String },
    Closed,
    Navigated { index: usize },
    AutoPlayChanged(bool),
}

/// State of an open lightbox.
#[derive(Debug)]
struct Session {
    key: String,
    carousel: Carousel,
    scroll: ScrollGuard,
}

/// Gallery controller for one mounted view.
#[derive(Debug)]
pub struct GalleryController {
    collections: Arc<GalleryCollections>,
    interval: Duration,
    scroll_lock: ScrollLock,
    session: Option<Session>,
}

impl GalleryController {
    /// Creates a closed controller over `collections`.
    #[must_use]
    pub fn new(
        collections: Arc<GalleryCollections>,
        interval: Duration,
        scroll_lock: ScrollLock,
    ) -> Self {
        Self {
            collections,
            interval,
            scroll_lock,
            session: None,
        }
    }

    /// Handle a gallery message, reading the clock where a timer is armed.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(key) => {
                if self.open(&key, Instant::now()) {
                    Effect::Opened { key }
                } else {
                    Effect::None
                }
            }
            Message::Close => {
                if self.close() {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::Next => {
                self.next();
                self.navigated()
            }
            Message::Previous => {
                self.previous();
                self.navigated()
            }
            Message::JumpTo(index) => {
                if self.jump_to_index(index) {
                    Effect::Navigated { index }
                } else {
                    Effect::None
                }
            }
            Message::ToggleAutoPlay => match self.toggle_auto_play(Instant::now()) {
                Some(enabled) => Effect::AutoPlayChanged(enabled),
                None => Effect::None,
            },
            Message::Tick(now) => {
                if self.tick(now) {
                    self.navigated()
                } else {
                    Effect::None
                }
            }
        }
    }

    fn navigated(&self) -> Effect {
        match &self.session {
            Some(session) => Effect::Navigated {
                index: session.carousel.index(),
            },
            None => Effect::None,
        }
    }

    /// Opens a collection at its first image with auto-play running.
    ///
    /// Unknown keys are logged and ignored. Opening while another collection
    /// is shown replaces it and starts fresh.
    pub fn open(&mut self, key: &str, now: Instant) -> bool {
        let Some(images) = self.collections.get(key) else {
            tracing::warn!(collection = key, "cannot open unknown gallery collection");
            return false;
        };

        let mut carousel = Carousel::new(images.len(), self.interval);
        carousel.play(now);

        // Reuse the guard when switching collections so the lock never blinks.
        let scroll = match self.session.take() {
            Some(previous) => previous.scroll,
            None => self.scroll_lock.acquire(),
        };

        self.session = Some(Session {
            key: key.to_string(),
            carousel,
            scroll,
        });
        tracing::debug!(collection = key, images = images.len(), "gallery opened");
        true
    }

    /// Closes the lightbox, cancelling the timer and releasing the scroll lock.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(collection = %session.key, "gallery closed");
                true
            }
            None => false,
        }
    }

    /// Manual step forward; pauses auto-play.
    pub fn next(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.carousel.next();
        }
    }

    /// Manual step backward; pauses auto-play.
    pub fn previous(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.carousel.previous();
        }
    }

    /// Jumps to `index` and pauses auto-play. Out-of-range requests are
    /// rejected without touching state.
    pub fn jump_to_index(&mut self, index: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let accepted = session.carousel.jump_to(index);
        if !accepted {
            tracing::debug!(
                collection = %session.key,
                index,
                len = session.carousel.len(),
                "rejected out-of-range gallery jump"
            );
        }
        accepted
    }

    /// Flips auto-play while open. Returns the new flag, or `None` when closed.
    pub fn toggle_auto_play(&mut self, now: Instant) -> Option<bool> {
        self.session
            .as_mut()
            .map(|session| session.carousel.toggle_auto_play(now))
    }

    /// Timer path. Advances without touching the auto-play flag.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.carousel.tick(now))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn active_collection_key(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.key.as_str())
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.carousel.index())
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.carousel.is_auto_advancing())
    }

    /// Whether the timer needs polling.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.carousel.timer().is_armed())
    }

    /// Images of the open collection.
    #[must_use]
    pub fn active_images(&self) -> &[String] {
        self.active_collection_key()
            .and_then(|key| self.collections.get(key))
            .unwrap_or(&[])
    }

    /// Image currently shown, if open.
    #[must_use]
    pub fn active_image(&self) -> Option<&str> {
        self.active_images()
            .get(self.active_index())
            .map(String::as_str)
    }

    #[must_use]
    pub fn collections(&self) -> &GalleryCollections {
        &self.collections
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        GalleryState {
            is_open: self.is_open(),
            active_collection_key: self.active_collection_key().map(str::to_string),
            active_index: self.active_index(),
            is_auto_advancing: self.is_auto_advancing(),
        }
    }
}
