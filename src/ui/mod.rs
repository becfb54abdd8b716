// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, handles its own messages, and reports effects the
//! application has to act on.
//!
//! # Screens
//!
//! - [`home`] - Featured projects
//! - [`about`] - Designer biography, experience and skills
//! - [`projects`] - Filterable, paginated project grid
//! - [`freelance`] - Services, workflow, testimonials and FAQ
//! - [`testimonials`] - Client testimonial carousel (freelance screen)
//!
//! # Shared Infrastructure
//!
//! - [`lightbox`] - Gallery overlay rendered from a `GalleryController`
//! - [`project_card`] - Project card and grid layout
//! - [`navbar`] - Screen tabs
//! - [`notice`] - Load warnings
//! - [`widgets`] - Custom Iced widgets (scroll-locked page)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod about;
pub mod design_tokens;
pub mod freelance;
pub mod home;
pub mod lightbox;
pub mod navbar;
pub mod notice;
pub mod project_card;
pub mod projects;
pub mod styles;
pub mod testimonials;
pub mod widgets;
