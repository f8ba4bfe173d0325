// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::SortOrder;
use crate::error::Error;
use crate::input::KeyPress;
use crate::ui::{overlay, thumbnails};
use iced::widget::image::Handle;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Thumbnails(thumbnails::Message),
    Overlay(overlay::Message),
    /// A lightbox-relevant key went down anywhere in the window.
    KeyPressed(KeyPress),
    /// A finger went down, with its x coordinate in logical pixels.
    TouchStarted(f32),
    /// A finger lifted, with its x coordinate in logical pixels.
    TouchEnded(f32),
    /// The platform lost track of a finger mid-gesture.
    TouchCancelled,
    /// Result from decoding a thumbnail in the background.
    ThumbnailLoaded {
        index: usize,
        result: Result<Handle, Error>,
    },
    /// Result from decoding a full-size image in the background.
    ImageLoaded {
        path: PathBuf,
        result: Result<Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Gallery directory to open. Defaults to the current directory.
    pub directory: Option<String>,
    /// Sort order override from the command line.
    pub sort: Option<SortOrder>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
