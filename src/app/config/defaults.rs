// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Lightbox auto-advance interval
//! - **Testimonials**: Testimonial carousel auto-advance interval
//! - **Catalog**: Asset base and projects per page
//! - **Tick**: Poll resolution for auto-advance timers

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default lightbox auto-advance interval (in milliseconds).
pub const DEFAULT_GALLERY_INTERVAL_MS: u64 = 3000;

/// Default testimonial carousel interval (in milliseconds).
pub const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 5000;

/// Shortest accepted auto-advance interval.
pub const MIN_AUTO_ADVANCE_MS: u64 = 1000;

/// Longest accepted auto-advance interval.
pub const MAX_AUTO_ADVANCE_MS: u64 = 60_000;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Projects shown per page on the projects screen.
pub const DEFAULT_PROJECTS_PER_PAGE: usize = 6;

/// Minimum projects per page.
pub const MIN_PROJECTS_PER_PAGE: usize = 1;

/// Maximum projects per page.
pub const MAX_PROJECTS_PER_PAGE: usize = 24;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// How often armed timers are polled (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_ADVANCE_MS > 0);
    assert!(MAX_AUTO_ADVANCE_MS >= MIN_AUTO_ADVANCE_MS);
    assert!(DEFAULT_GALLERY_INTERVAL_MS >= MIN_AUTO_ADVANCE_MS);
    assert!(DEFAULT_GALLERY_INTERVAL_MS <= MAX_AUTO_ADVANCE_MS);
    assert!(DEFAULT_TESTIMONIAL_INTERVAL_MS >= MIN_AUTO_ADVANCE_MS);
    assert!(DEFAULT_TESTIMONIAL_INTERVAL_MS <= MAX_AUTO_ADVANCE_MS);

    assert!(MIN_PROJECTS_PER_PAGE > 0);
    assert!(MAX_PROJECTS_PER_PAGE >= MIN_PROJECTS_PER_PAGE);
    assert!(DEFAULT_PROJECTS_PER_PAGE >= MIN_PROJECTS_PER_PAGE);
    assert!(DEFAULT_PROJECTS_PER_PAGE <= MAX_PROJECTS_PER_PAGE);

    // Timers are polled, so the poll must be finer than any interval.
    assert!(TICK_INTERVAL_MS < MIN_AUTO_ADVANCE_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_interval_matches_slideshow_pace() {
        assert_eq!(DEFAULT_GALLERY_INTERVAL_MS, 3000);
        assert_eq!(DEFAULT_TESTIMONIAL_INTERVAL_MS, 5000);
    }

    #[test]
    fn per_page_defaults_are_valid() {
        assert_eq!(DEFAULT_PROJECTS_PER_PAGE, 6);
        assert!(DEFAULT_PROJECTS_PER_PAGE <= MAX_PROJECTS_PER_PAGE);
    }
}
