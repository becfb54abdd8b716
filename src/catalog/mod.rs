// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: projects with their galleries, client testimonials,
//! the designer profile and the freelance offering (services, workflow, FAQ).
//!
//! A default catalog ships inside the binary. A TOML file with the same shape
//! can replace it at startup:
//!
//! ```toml
//! [[projects]]
//! id = 1
//! slug = "carhub"
//! name = "CarHub"
//! description = "Car marketplace UI"
//! cover = "images/projects/car_1.png"
//! kind = "web"
//! industry = "Automotive"
//! images = ["images/projects/car_1.png", "images/projects/car_2.png"]
//!
//! [[testimonials]]
//! name = "Sarah Johnson"
//! role = "CEO, TechStart"
//! quote = "..."
//! rating = 5
//!
//! [profile]
//! name = "Prabhath Subhashana"
//! bio = "..."
//!
//! [[faqs]]
//! question = "How long does a typical project take?"
//! answer = "..."
//! ```

pub mod assets;
pub mod filter;
pub mod profile;

pub use assets::resolve_asset_path;
pub use filter::{Paginator, ProjectFilter};
pub use profile::{Experience, Faq, Profile, ProfileLink, Service, SkillGroup, WorkflowStep};

use crate::error::{CatalogError, Result};
use crate::gallery::GalleryCollections;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct EmbeddedCatalog;

const EMBEDDED_CATALOG_FILE: &str = "projects.toml";

/// Highest testimonial rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    App,
    Web,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::App, ProjectKind::Web];

    /// Returns the i18n message key for the kind label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectKind::App => "project-kind-app",
            ProjectKind::Web => "project-kind-web",
        }
    }
}

/// Outbound links shown on a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub design: Option<String>,
    #[serde(default)]
    pub case_study: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub hosted: Option<String>,
}

impl ProjectLinks {
    /// Links that are present, paired with their label key.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("project-link-design", self.design.as_deref()),
            ("project-link-case-study", self.case_study.as_deref()),
            ("project-link-github", self.github.as_deref()),
            ("project-link-hosted", self.hosted.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, url)| url.map(|url| (key, url)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    /// Gallery collection key.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cover: String,
    pub kind: ProjectKind,
    pub industry: String,
    /// Shown on the home screen.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    /// Up to two upper-cased initials, used as a cover placeholder.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    #[must_use]
    pub fn has_gallery(&self) -> bool {
        !self.images.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub project: Option<String>,
    pub quote: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    MAX_RATING
}

impl Testimonial {
    /// Rating clamped to `1..=MAX_RATING`.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, MAX_RATING)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub workflow: Vec<WorkflowStep>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl Catalog {
    /// Parses a catalog and checks that slugs are unique.
    pub fn parse(content: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut seen = HashSet::new();
        for project in &catalog.projects {
            if !seen.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()).into());
            }
        }
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = EmbeddedCatalog::get(EMBEDDED_CATALOG_FILE).ok_or(CatalogError::MissingEmbedded)?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads `path` when given, falling back to the embedded catalog if it is
    /// missing or invalid. The returned warning is an i18n key.
    pub fn load_or_embedded(path: Option<&Path>) -> (Self, Option<String>) {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(catalog) => {
                    tracing::info!(path = %path.display(), projects = catalog.projects.len(), "catalog loaded");
                    return (catalog, None);
                }
                Err(err) => {
                    tracing::error!(path = %path.display(), error = %err, "falling back to embedded catalog");
                    let (catalog, _) = Self::load_or_embedded(None);
                    return (catalog, Some("notification-catalog-load-error".to_string()));
                }
            }
        }

        match Self::embedded() {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                tracing::error!(error = %err, "embedded catalog is unusable");
                (
                    Catalog::default(),
                    Some("notification-catalog-load-error".to_string()),
                )
            }
        }
    }

    #[must_use]
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| project.featured)
    }

    /// Distinct industries in catalog order.
    #[must_use]
    pub fn industries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|project| project.industry.as_str())
            .filter(|industry| seen.insert(*industry))
            .collect()
    }

    /// Gallery collections keyed by slug, with image paths resolved against
    /// `asset_base`. Projects without images get no collection.
    #[must_use]
    pub fn gallery_collections(&self, asset_base: &str) -> GalleryCollections {
        self.projects
            .iter()
            .filter(|project| project.has_gallery())
            .map(|project| {
                let images: Vec<String> = project
                    .images
                    .iter()
                    .map(|image| resolve_asset_path(asset_base, image))
                    .collect();
                (project.slug.clone(), images)
            })
            .collect()
    }
}
