// SPDX-License-Identifier: MPL-2.0
//! Designer biography and freelance offering content.

use serde::Deserialize;

/// Labelled external link (social profile, email).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

/// The designer shown on the about screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

impl Profile {
    /// A profile without a name or bio has nothing worth showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.bio.trim().is_empty()
    }
}

/// A job or course on the about screen timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A freelance service package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One step of the freelance workflow. Steps are numbered by position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
