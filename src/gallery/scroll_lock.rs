// SPDX-License-Identifier: MPL-2.0
//! Background scroll suspension.
//!
//! A [`ScrollLock`] is shared by every gallery on a window. Each open gallery
//! holds a [`ScrollGuard`]; the page behind the overlay stays frozen while at
//! least one guard is alive. Guards release on drop, so a gallery that is
//! closed through any path (or simply dropped) can never leave the page stuck.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared scroll-lock counter for one window.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends background scrolling until the returned guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether any gallery currently holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Scoped hold on a [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_locks_until_dropped() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_release_independently() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.clone().acquire();

        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
