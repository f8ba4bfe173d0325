// SPDX-License-Identifier: MPL-2.0
//! The lightbox state machine.
//!
//! [`Lightbox`] owns the open/closed flag and the current index, and is the
//! single source of truth for both. It never touches a window directly:
//! every visible consequence goes through the [`Surface`] trait, so the
//! machine can be exercised in tests against a recording mock while the
//! application provides the real overlay pane.

use crate::gallery::{Gallery, GalleryEntry};
use crate::input::Action;

/// The show/hide/update contract of the rendering side.
///
/// Overlay visibility and the scroll lock of the page behind it are set
/// separately but always driven together by the controller, so an
/// implementation only has to store what it is told.
pub trait Surface {
    fn set_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    fn display(&mut self, entry: &GalleryEntry);
}

/// Modal overlay state: whether it is shown and which entry it shows.
///
/// Whenever the gallery is non-empty, `current` is a valid index into it;
/// navigation maintains the invariant with modular arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    open: bool,
    current: usize,
}

impl Lightbox {
    /// Creates a closed lightbox at the first position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the entry the lightbox currently points at, if any.
    pub fn current_entry<'a>(&self, gallery: &'a Gallery) -> Option<&'a GalleryEntry> {
        gallery.entry(self.current)
    }

    /// Opens the overlay at `index` and projects that entry.
    ///
    /// An index with no entry (which covers the empty gallery) is a no-op,
    /// keeping the machine inert when there is nothing to show.
    pub fn open<S: Surface>(&mut self, index: usize, gallery: &Gallery, surface: &mut S) {
        if gallery.entry(index).is_none() {
            return;
        }
        self.current = index;
        self.set_open(true, surface);
        self.render(gallery, surface);
    }

    /// Hides the overlay and releases the scroll lock. Idempotent; the
    /// current index is kept so reopening resumes in place.
    pub fn close<S: Surface>(&mut self, surface: &mut S) {
        self.set_open(false, surface);
    }

    /// Steps forward, wrapping from the last entry to the first.
    pub fn next<S: Surface>(&mut self, gallery: &Gallery, surface: &mut S) {
        if gallery.is_empty() {
            return;
        }
        self.current = (self.current + 1) % gallery.len();
        self.render(gallery, surface);
    }

    /// Steps backward, wrapping from the first entry to the last.
    pub fn previous<S: Surface>(&mut self, gallery: &Gallery, surface: &mut S) {
        if gallery.is_empty() {
            return;
        }
        self.current = (self.current + gallery.len() - 1) % gallery.len();
        self.render(gallery, surface);
    }

    /// Projects the current entry onto the surface. Idempotent and free of
    /// state changes; calling it twice shows the same entry twice.
    pub fn render<S: Surface>(&self, gallery: &Gallery, surface: &mut S) {
        if let Some(entry) = gallery.entry(self.current) {
            surface.display(entry);
        }
    }

    /// Applies a translated input action.
    pub fn apply<S: Surface>(&mut self, action: Action, gallery: &Gallery, surface: &mut S) {
        match action {
            Action::Open(index) => self.open(index, gallery, surface),
            Action::Close => self.close(surface),
            Action::Next => self.next(gallery, surface),
            Action::Previous => self.previous(gallery, surface),
        }
    }

    // Overlay visibility and scroll lock move together or not at all.
    fn set_open<S: Surface>(&mut self, open: bool, surface: &mut S) {
        self.open = open;
        surface.set_visible(open);
        surface.set_scroll_locked(open);
    }
}
