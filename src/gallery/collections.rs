// SPDX-License-Identifier: MPL-2.0
//! Named image collections shown by the lightbox.

use std::collections::BTreeMap;

/// Static mapping from collection key (a project slug) to its ordered images.
///
/// Collections are fixed once built. Empty collections are refused at
/// insertion so an open gallery always has at least one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryCollections {
    collections: BTreeMap<String, Vec<String>>,
}

impl GalleryCollections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection. Returns `false` (and keeps the mapping unchanged)
    /// when `images` is empty.
    pub fn insert(&mut self, key: impl Into<String>, images: Vec<String>) -> bool {
        let key = key.into();
        if images.is_empty() {
            tracing::warn!(collection = %key, "skipping gallery collection without images");
            return false;
        }
        self.collections.insert(key, images);
        true
    }

    /// Images of a collection, in display order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.collections.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.collections.contains_key(key)
    }

    /// Number of images in a collection, or 0 if the key is unknown.
    #[must_use]
    pub fn len_of(&self, key: &str) -> usize {
        self.collections.get(key).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for GalleryCollections {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut collections = Self::new();
        for (key, images) in iter {
            collections.insert(key, images);
        }
        collections
    }
}
