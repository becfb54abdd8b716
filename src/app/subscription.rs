// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are conditional: the keyboard listener exists only
//! while a lightbox is open, and the tick only while some auto-advance timer
//! is armed. An idle portfolio therefore receives no periodic messages.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use crate::gallery::keyboard;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes bound key presses to the open gallery.
///
/// Only events no widget captured are considered.
pub fn create_keyboard_subscription(gallery_open: bool) -> Subscription<Message> {
    if !gallery_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match &event {
            event::Event::Keyboard(key_event) => {
                keyboard::message_for_event(key_event).map(Message::GalleryKey)
            }
            _ => None,
        }
    })
}

/// Creates the periodic tick that polls the auto-advance timers.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
