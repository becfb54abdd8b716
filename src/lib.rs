// SPDX-License-Identifier: MPL-2.0
//! `folio_gallery` is a portfolio viewer built with the Iced GUI framework.
//!
//! It presents the designer's biography, a project catalog with per-project
//! image galleries shown in an auto-advancing lightbox, and the freelance
//! offering with a client testimonial carousel. Strings are localized with
//! Fluent and user preferences live in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/folio_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;
