// SPDX-License-Identifier: MPL-2.0
//! This module reads the application's configuration from a `settings.toml`
//! file. The file is written by hand; the application never modifies it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Lightbox auto-advance interval
//! - `[testimonials]` - Testimonial carousel interval
//! - `[catalog]` - Catalog file, asset base directory, projects per page
//!
//! Out-of-range numbers are accepted on load and clamped by the accessors,
//! so a hand-edited file can never request a zero-length slideshow.
//!
//! # Examples
//!
//! ```no_run
//! use folio_gallery::app::config::{self, Config};
//!
//! let (config, _warning) = config::load();
//! let interval = config.gallery.interval();
//! assert!(interval.as_millis() >= 1000);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::assets::DEFAULT_ASSET_BASE;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Lightbox settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Delay between automatic advances (milliseconds).
    #[serde(default = "default_gallery_interval")]
    pub auto_advance_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_gallery_interval(),
        }
    }
}

impl GalleryConfig {
    /// Interval clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        clamp_interval(self.auto_advance_ms.unwrap_or(DEFAULT_GALLERY_INTERVAL_MS))
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TestimonialsConfig {
    #[serde(default = "default_testimonial_interval")]
    pub auto_advance_ms: Option<u64>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_testimonial_interval(),
        }
    }
}

impl TestimonialsConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        clamp_interval(
            self.auto_advance_ms
                .unwrap_or(DEFAULT_TESTIMONIAL_INTERVAL_MS),
        )
    }
}

/// Catalog source and layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog file replacing the embedded one.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Directory (or URL prefix) that image paths are resolved against.
    #[serde(default)]
    pub asset_base: Option<String>,

    /// Projects per page on the projects screen.
    #[serde(default = "default_per_page")]
    pub per_page: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            asset_base: None,
            per_page: default_per_page(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn asset_base(&self) -> &str {
        self.asset_base.as_deref().unwrap_or(DEFAULT_ASSET_BASE)
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
            .unwrap_or(DEFAULT_PROJECTS_PER_PAGE)
            .clamp(MIN_PROJECTS_PER_PAGE, MAX_PROJECTS_PER_PAGE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub testimonials: TestimonialsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gallery_interval() -> Option<u64> {
    Some(DEFAULT_GALLERY_INTERVAL_MS)
}

fn default_testimonial_interval() -> Option<u64> {
    Some(DEFAULT_TESTIMONIAL_INTERVAL_MS)
}

fn default_per_page() -> Option<usize> {
    Some(DEFAULT_PROJECTS_PER_PAGE)
}

fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn full_file_loads_every_section() {
        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            gallery: GalleryConfig {
                auto_advance_ms: Some(4500),
            },
            testimonials: TestimonialsConfig {
                auto_advance_ms: Some(8000),
            },
            catalog: CatalogConfig {
                path: Some(PathBuf::from("/srv/catalog.toml")),
                asset_base: Some("/srv/site".to_string()),
                per_page: Some(9),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
            [general]
            language = "fr"

            [gallery]
            auto_advance_ms = 4500

            [testimonials]
            auto_advance_ms = 8000

            [catalog]
            path = "/srv/catalog.toml"
            asset_base = "/srv/site"
            per_page = 9
            "#,
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, expected);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.catalog.per_page(), DEFAULT_PROJECTS_PER_PAGE);
        assert_eq!(loaded.catalog.asset_base(), DEFAULT_ASSET_BASE);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery]\nauto_advance_ms = \"fast\"")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn intervals_are_clamped() {
        let fast = GalleryConfig {
            auto_advance_ms: Some(10),
        };
        assert_eq!(fast.interval(), Duration::from_millis(MIN_AUTO_ADVANCE_MS));

        let slow = TestimonialsConfig {
            auto_advance_ms: Some(u64::MAX),
        };
        assert_eq!(slow.interval(), Duration::from_millis(MAX_AUTO_ADVANCE_MS));

        let unset = GalleryConfig {
            auto_advance_ms: None,
        };
        assert_eq!(
            unset.interval(),
            Duration::from_millis(DEFAULT_GALLERY_INTERVAL_MS)
        );
    }

    #[test]
    fn per_page_is_clamped() {
        let catalog = CatalogConfig {
            per_page: Some(0),
            ..CatalogConfig::default()
        };
        assert_eq!(catalog.per_page(), MIN_PROJECTS_PER_PAGE);
    }
}
