// SPDX-License-Identifier: MPL-2.0
pub mod scroll_locked;

pub use scroll_locked::{scroll_locked, ScrollLocked};
