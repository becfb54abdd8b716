// SPDX-License-Identifier: MPL-2.0
//! Project filtering and pagination for the projects screen.

use super::{Project, ProjectKind};

/// Type and industry filter. `None` on either axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub kind: Option<ProjectKind>,
    pub industry: Option<String>,
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let kind_match = self.kind.is_none_or(|kind| project.kind == kind);
        let industry_match = self
            .industry
            .as_deref()
            .is_none_or(|industry| project.industry == industry);
        kind_match && industry_match
    }

    /// Projects passing the filter, in catalog order.
    pub fn apply<'a>(&'a self, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> + 'a {
        projects.iter().filter(move |project| self.matches(project))
    }
}

/// Page cursor over a filtered project list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
    page: usize,
}

impl Paginator {
    /// `per_page` of zero is treated as one.
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            page: 1,
        }
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages for `total` items; never less than one.
    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    /// Moves to `page`, clamped to `1..=page_count(total)`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    pub fn next(&mut self, total: usize) {
        self.go_to(self.page + 1, total);
    }

    pub fn previous(&mut self, total: usize) {
        self.go_to(self.page.saturating_sub(1), total);
    }

    /// Back to the first page, used whenever the filter changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Index range of the current page within a list of `total` items.
    #[must_use]
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(total);
        let end = (start + self.per_page).min(total);
        start..end
    }
}
