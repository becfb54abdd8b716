// SPDX-License-Identifier: MPL-2.0
//! Asset path resolution.

use std::path::Path;

/// Asset base used when neither the CLI nor settings name one: a `public`
/// folder in the working directory, the layout the portfolio site ships with.
pub const DEFAULT_ASSET_BASE: &str = "public";

/// Base an empty asset base resolves against.
pub const ROOT_ASSET_BASE: &str = "/";

/// Joins a catalog-relative asset path onto the asset base.
///
/// A leading `/` on `path` is dropped and the base always ends up with exactly
/// one trailing `/`, so `("/srv/site", "/images/a.png")` and
/// `("/srv/site/", "images/a.png")` resolve identically. An empty base falls
/// back to [`ROOT_ASSET_BASE`].
#[must_use]
pub fn resolve_asset_path(base: &str, path: &str) -> String {
    let base = if base.is_empty() {
        ROOT_ASSET_BASE
    } else {
        base
    };
    let clean_path = path.strip_prefix('/').unwrap_or(path);

    let mut resolved = String::with_capacity(base.len() + clean_path.len() + 1);
    resolved.push_str(base);
    if !base.ends_with('/') {
        resolved.push('/');
    }
    resolved.push_str(clean_path);
    resolved
}

/// Returns a warning key when `base` is a local directory that does not
/// exist, in which case no cover or gallery image can load. URL bases are
/// not checked.
#[must_use]
pub fn asset_base_warning(base: &str) -> Option<String> {
    if base.contains("://") || Path::new(base).is_dir() {
        return None;
    }
    tracing::warn!(%base, "asset base is not a directory; images will not load");
    Some("notification-asset-base-missing".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn joins_with_single_separator() {
        assert_eq!(
            resolve_asset_path("/srv/site", "images/a.png"),
            "/srv/site/images/a.png"
        );
        assert_eq!(
            resolve_asset_path("/srv/site/", "/images/a.png"),
            "/srv/site/images/a.png"
        );
    }

    #[test]
    fn empty_base_uses_root() {
        assert_eq!(resolve_asset_path("", "images/a.png"), "/images/a.png");
        assert_eq!(resolve_asset_path("/", "/images/a.png"), "/images/a.png");
    }

    #[test]
    fn only_one_leading_slash_is_stripped() {
        assert_eq!(resolve_asset_path("base", "//x.png"), "base//x.png");
    }

    #[test]
    fn existing_directory_has_no_warning() {
        let dir = tempdir().expect("temp dir");
        let base = dir.path().to_string_lossy();
        assert_eq!(asset_base_warning(&base), None);
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().expect("temp dir");
        let base = dir.path().join("public");
        assert_eq!(
            asset_base_warning(&base.to_string_lossy()).as_deref(),
            Some("notification-asset-base-missing")
        );
    }

    #[test]
    fn url_bases_are_not_checked() {
        assert_eq!(asset_base_warning("https://cdn.example.com/site"), None);
    }
}
