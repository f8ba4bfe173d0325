// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid component.
//!
//! Renders the gallery as rows of clickable cells in navigation order.
//! Thumbnails decode in the background; a cell shows the entry's alt text
//! until its handle arrives.

use crate::gallery::Gallery;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, Column, Image, Row, Text};
use iced::Element;

const GRID_COLUMNS: usize = 4;
const CELL_SPACING: f32 = 8.0;
const GRID_PADDING: f32 = 16.0;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked, by gallery index.
    Pressed(usize),
}

/// Loaded thumbnail handles, index-aligned with the gallery.
#[derive(Debug, Clone, Default)]
pub struct State {
    handles: Vec<Option<Handle>>,
}

impl State {
    /// Creates slots for `count` thumbnails, all pending.
    pub fn new(count: usize) -> Self {
        Self {
            handles: vec![None; count],
        }
    }

    /// Stores a decoded thumbnail. Out-of-range indices are ignored.
    pub fn set_handle(&mut self, index: usize, handle: Handle) {
        if let Some(slot) = self.handles.get_mut(index) {
            *slot = Some(handle);
        }
    }

    pub fn handle(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn loaded_count(&self) -> usize {
        self.handles.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub state: &'a State,
    /// Edge length of one cell in logical pixels.
    pub cell_size: u32,
}

/// Render the thumbnail grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let size = ctx.cell_size as f32;
    let mut grid = Column::new().spacing(CELL_SPACING).padding(GRID_PADDING);

    for (row_index, chunk) in ctx.gallery.entries().chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(CELL_SPACING);
        for (offset, entry) in chunk.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + offset;
            let cell: Element<'_, Message> = match ctx.state.handle(index) {
                Some(handle) => Image::new(handle.clone()).width(size).height(size).into(),
                None => container(Text::new(entry.alt_text()).size(14))
                    .width(size)
                    .height(size)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .into(),
            };
            row = row.push(button(cell).padding(0).on_press(Message::Pressed(index)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn new_state_has_only_pending_slots() {
        let state = State::new(3);
        assert_eq!(state.loaded_count(), 0);
        assert!(state.handle(0).is_none());
    }

    #[test]
    fn set_handle_fills_its_slot() {
        let mut state = State::new(3);
        state.set_handle(1, handle());

        assert_eq!(state.loaded_count(), 1);
        assert!(state.handle(0).is_none());
        assert!(state.handle(1).is_some());
    }

    #[test]
    fn out_of_range_handles_are_dropped() {
        let mut state = State::new(1);
        state.set_handle(5, handle());
        assert_eq!(state.loaded_count(), 0);
    }
}
