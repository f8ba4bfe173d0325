// SPDX-License-Identifier: MPL-2.0
//! The lightbox overlay pane.
//!
//! [`Pane`] is the production [`Surface`] implementation: it stores exactly
//! what the state machine tells it — visibility, scroll lock, and the entry
//! currently on display. The view projects that onto a dimmed backdrop with
//! the enlarged image, a caption bar, and close/previous/next controls.
//! Messages name the pointer target that was hit; translating targets into
//! actions is the job of the `input` module.

use crate::gallery::GalleryEntry;
use crate::lightbox::Surface;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, mouse_area, Column, Container, Image, Row, Text};
use iced::{Background, Color, ContentFit, Element, Length, Theme};
use std::path::{Path, PathBuf};

/// Messages emitted by the overlay. Each names what the pointer landed on.
#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    NextPressed,
    PreviousPressed,
    BackdropPressed,
    ContentPressed,
    ContentRightPressed,
}

/// Overlay state written by the lightbox controller.
#[derive(Debug, Clone, Default)]
pub struct Pane {
    visible: bool,
    scroll_locked: bool,
    source: Option<PathBuf>,
    image: Option<Handle>,
    alt_text: String,
    caption: String,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Source path of the entry on display, used to drop stale async loads.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Swaps in a decoded handle for the entry on display, e.g. from the
    /// prefetch cache.
    pub fn set_image(&mut self, handle: Handle) {
        self.image = Some(handle);
    }
}

impl Surface for Pane {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn display(&mut self, entry: &GalleryEntry) {
        self.source = Some(entry.source().to_path_buf());
        // lazily-loaded path handle; replaced when a decoded handle arrives
        self.image = Some(Handle::from_path(entry.source()));
        self.alt_text = entry.alt_text().to_string();
        self.caption = entry.caption().to_string();
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub pane: &'a Pane,
    /// Zero-based index of the displayed entry.
    pub position: usize,
    /// Total number of gallery entries.
    pub count: usize,
}

/// Render the overlay: backdrop, centered content, and floating controls.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picture: Element<'_, Message> = match ctx.pane.image() {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => Text::new(ctx.pane.alt_text()).size(20).into(),
    };

    let caption = Text::new(ctx.pane.caption()).size(16);
    let counter = Text::new(format!("{} / {}", ctx.position + 1, ctx.count)).size(14);

    let content = Column::new()
        .push(picture)
        .push(caption)
        .push(counter)
        .spacing(12)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    // Clicks anywhere on the content block are inert; only the dimmed area
    // around it dismisses the overlay. Right-clicks are swallowed here so
    // the image never grows a context menu.
    let content = mouse_area(content)
        .on_press(Message::ContentPressed)
        .on_right_press(Message::ContentRightPressed);

    let previous = button(Text::new("‹").size(40))
        .style(control_button)
        .padding(8)
        .on_press(Message::PreviousPressed);
    let next = button(Text::new("›").size(40))
        .style(control_button)
        .padding(8)
        .on_press(Message::NextPressed);

    let nav_row = Row::new()
        .push(previous)
        .push(content)
        .push(next)
        .spacing(16)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    let backdrop_layer = mouse_area(
        Container::new(nav_row)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(32)
            .style(backdrop)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(Message::BackdropPressed);

    let close_layer = Container::new(
        button(Text::new("✕").size(24))
            .style(control_button)
            .padding(8)
            .on_press(Message::ClosePressed),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(16);

    iced::widget::Stack::new()
        .push(backdrop_layer)
        .push(close_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.92))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

fn control_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => Color::from_rgb(0.75, 0.75, 0.75),
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
