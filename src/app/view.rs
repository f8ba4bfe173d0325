// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The thumbnail grid is the base layer; while the lightbox is open the
//! overlay is stacked on top and the grid loses its scrollable, which is the
//! desktop equivalent of locking the page behind a modal.

use super::Message;
use crate::gallery::Gallery;
use crate::lightbox::Lightbox;
use crate::ui::{overlay, thumbnails};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, scrollable, Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a Gallery,
    pub lightbox: &'a Lightbox,
    pub overlay: &'a overlay::Pane,
    pub thumbnails: &'a thumbnails::State,
    pub thumbnail_size: u32,
}

/// Renders the grid, with the overlay stacked on top while open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.gallery.is_empty() {
        return empty_state();
    }

    let grid = thumbnails::view(thumbnails::ViewContext {
        gallery: ctx.gallery,
        state: ctx.thumbnails,
        cell_size: ctx.thumbnail_size,
    })
    .map(Message::Thumbnails);

    let base: Element<'_, Message> = if ctx.overlay.scroll_locked() {
        // frozen behind the modal
        Container::new(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into()
    } else {
        scrollable(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    if !ctx.overlay.is_visible() {
        return base;
    }

    let overlay_view = overlay::view(overlay::ViewContext {
        pane: ctx.overlay,
        position: ctx.lightbox.current_index(),
        count: ctx.gallery.len(),
    })
    .map(Message::Overlay);

    iced::widget::Stack::new()
        .push(base)
        .push(overlay_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state() -> Element<'static, Message> {
    container(Text::new("No images found in this directory").size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
