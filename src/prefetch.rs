// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for instant lightbox navigation.
//!
//! Opening or stepping the lightbox warms the wrap-around neighbors of the
//! current entry in the background, so the next navigation usually finds its
//! image already decoded. Least recently shown images are evicted first.

use crate::gallery::Gallery;
use iced::widget::image::Handle;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default number of decoded images kept around.
pub const DEFAULT_CACHE_IMAGES: usize = 16;

/// LRU cache of decoded full-size handles, keyed by source path.
pub struct ImageCache {
    cache: LruCache<PathBuf, Handle>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the cached handle for `path`, marking it most recently used.
    pub fn get(&mut self, path: &Path) -> Option<Handle> {
        self.cache.get(path).cloned()
    }

    pub fn insert(&mut self, path: PathBuf, handle: Handle) {
        self.cache.put(path, handle);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_IMAGES)
    }
}

impl fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.cache.len())
            .field("cap", &self.cache.cap())
            .finish()
    }
}

/// Paths worth warming around `current`: the entry itself plus its
/// wrap-around neighbors, deduplicated for tiny galleries.
pub fn neighbor_paths(gallery: &Gallery, current: usize) -> Vec<PathBuf> {
    let count = gallery.len();
    if count == 0 {
        return Vec::new();
    }

    let mut paths = Vec::new();
    for index in [current, (current + 1) % count, (current + count - 1) % count] {
        if let Some(entry) = gallery.entry(index) {
            let path = entry.source().to_path_buf();
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryEntry;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn gallery_of(names: &[&str]) -> Gallery {
        Gallery::from_entries(
            names
                .iter()
                .map(|name| GalleryEntry::new(PathBuf::from(name), *name, None))
                .collect(),
        )
    }

    #[test]
    fn cache_returns_inserted_handles() {
        let mut cache = ImageCache::new(4);
        cache.insert(PathBuf::from("a.jpg"), handle());

        assert!(cache.contains(Path::new("a.jpg")));
        assert!(cache.get(Path::new("a.jpg")).is_some());
        assert!(cache.get(Path::new("b.jpg")).is_none());
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.insert(PathBuf::from("a.jpg"), handle());
        cache.insert(PathBuf::from("b.jpg"), handle());
        // touch a so b becomes the eviction candidate
        cache.get(Path::new("a.jpg"));
        cache.insert(PathBuf::from("c.jpg"), handle());

        assert!(cache.contains(Path::new("a.jpg")));
        assert!(!cache.contains(Path::new("b.jpg")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut cache = ImageCache::new(0);
        cache.insert(PathBuf::from("a.jpg"), handle());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn neighbors_wrap_around_the_sequence() {
        let gallery = gallery_of(&["a.jpg", "b.jpg", "c.jpg"]);
        let paths = neighbor_paths(&gallery, 2);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("c.jpg"),
                PathBuf::from("a.jpg"),
                PathBuf::from("b.jpg"),
            ]
        );
    }

    #[test]
    fn neighbors_deduplicate_tiny_galleries() {
        let one = gallery_of(&["a.jpg"]);
        assert_eq!(neighbor_paths(&one, 0), vec![PathBuf::from("a.jpg")]);

        let two = gallery_of(&["a.jpg", "b.jpg"]);
        assert_eq!(
            neighbor_paths(&two, 0),
            vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]
        );
    }

    #[test]
    fn neighbors_of_empty_gallery_are_empty() {
        assert!(neighbor_paths(&Gallery::new(), 0).is_empty());
    }
}
