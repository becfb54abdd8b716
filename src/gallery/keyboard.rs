// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for an open lightbox.
//!
//! | Key        | Action             |
//! |------------|--------------------|
//! | Escape     | close              |
//! | ArrowLeft  | previous image     |
//! | ArrowRight | next image         |
//! | Space      | toggle auto-play   |
//!
//! The application only installs the keyboard listener while a gallery is
//! open, and every bound key is consumed so Space never reaches the page.

use super::controller::Message;
use iced::keyboard::{self, key::Named, Key};

/// Maps a key to a gallery message. Unbound keys return `None`.
#[must_use]
pub fn message_for_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::Close),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::Space) => Some(Message::ToggleAutoPlay),
        _ => None,
    }
}

/// Maps a raw keyboard event. Only presses are bound; releases and
/// modifier changes are ignored.
#[must_use]
pub fn message_for_event(event: &keyboard::Event) -> Option<Message> {
    match event {
        keyboard::Event::KeyPressed { key, .. } => message_for_key(key),
        _ => None,
    }
}
