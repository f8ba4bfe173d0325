// SPDX-License-Identifier: MPL-2.0
//! Gallery entries and directory scanning.
//!
//! A [`Gallery`] is the ordered, index-addressable sequence of images the
//! lightbox navigates. It is built once at startup — either from a directory
//! scan or from in-memory entries — and never mutated afterwards; its order
//! is the navigation order.

use crate::config::SortOrder;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// One image of the gallery: where it lives, a human-readable fallback name,
/// and the caption shown under the enlarged view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    source: PathBuf,
    alt_text: String,
    caption: String,
}

impl GalleryEntry {
    /// Creates an entry. A missing or empty caption silently falls back to
    /// the alt text.
    pub fn new(source: PathBuf, alt_text: impl Into<String>, caption: Option<String>) -> Self {
        let alt_text = alt_text.into();
        let caption = caption
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| alt_text.clone());
        Self {
            source,
            alt_text,
            caption,
        }
    }

    /// Builds an entry for an image file, deriving the alt text from the
    /// file stem and the caption from an optional `<stem>.txt` sidecar.
    fn from_file(source: PathBuf) -> Self {
        let alt_text = alt_text_for(&source);
        let caption = sidecar_caption(&source);
        Self::new(source, alt_text, caption)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Ordered sequence of gallery entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Creates an empty gallery. Every operation on it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gallery from pre-constructed entries, preserving their order.
    pub fn from_entries(entries: Vec<GalleryEntry>) -> Self {
        Self { entries }
    }

    /// Scans a single directory for supported image files, sorts them, and
    /// builds entries with sidecar captions.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut files = Vec::new();

        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }

        sort_files(&mut files, sort_order)?;

        Ok(Self {
            entries: files.into_iter().map(GalleryEntry::from_file).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if it exists.
    pub fn entry(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }
}

/// Checks the file extension against the supported raster formats.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn sort_files(files: &mut Vec<PathBuf>, sort_order: SortOrder) -> Result<()> {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            let mut keyed = files
                .drain(..)
                .map(|path| {
                    let modified = fs::metadata(&path)?.modified()?;
                    Ok((modified, path))
                })
                .collect::<Result<Vec<_>>>()?;
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            *files = keyed.into_iter().map(|(_, path)| path).collect();
        }
    }
    Ok(())
}

/// Derives a readable fallback name from the file stem, e.g.
/// `rainy_day-01.jpg` becomes `rainy day 01`.
fn alt_text_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image")
        .replace(['_', '-'], " ")
}

/// Reads a `<stem>.txt` sidecar next to the image, if present.
/// Whitespace-only sidecars count as absent.
fn sidecar_caption(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path.with_extension("txt")).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
