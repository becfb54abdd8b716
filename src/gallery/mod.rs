// SPDX-License-Identifier: MPL-2.0
//! Project lightbox: collections, the controller that drives them, and the
//! pieces it is built from (carousel core, auto-advance timer, scroll lock,
//! key bindings).

pub mod carousel;
pub mod collections;
pub mod controller;
pub mod keyboard;
pub mod scroll_lock;
pub mod timer;

pub use carousel::Carousel;
pub use collections::GalleryCollections;
pub use controller::{Effect, GalleryController, GalleryState, Message};
pub use scroll_lock::{ScrollGuard, ScrollLock};
pub use timer::AutoAdvanceTimer;
