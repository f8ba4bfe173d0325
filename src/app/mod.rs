// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the renderer-independent core (gallery, lightbox,
//! input translation) to a real Iced window: the thumbnail grid, the overlay
//! pane, background decoding, and the event subscription.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::Gallery;
use crate::input::SwipeTracker;
use crate::lightbox::Lightbox;
use crate::prefetch::{ImageCache, DEFAULT_CACHE_IMAGES};
use crate::ui::{overlay, thumbnails};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    gallery: Gallery,
    lightbox: Lightbox,
    overlay: overlay::Pane,
    thumbnails: thumbnails::State,
    swipe: SwipeTracker,
    cache: ImageCache,
    thumbnail_size: u32,
    prefetch_enabled: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_len", &self.gallery.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, scans the gallery directory, and kicks
    /// off background thumbnail decoding.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_dir {
            Some(dir) => {
                config::load_from_path(&PathBuf::from(dir).join(config::CONFIG_FILE))
                    .unwrap_or_default()
            }
            None => config::load().unwrap_or_default(),
        };

        let sort_order = flags.sort.or(config.sort_order).unwrap_or_default();
        let thumbnail_size = config::clamp_thumbnail_size(
            config.thumbnail_size.unwrap_or(config::DEFAULT_THUMBNAIL_SIZE),
        );
        let prefetch_enabled = config.prefetch.unwrap_or(true);

        let directory = flags
            .directory
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        // an unreadable directory degrades to the empty state
        let gallery = Gallery::scan_directory(&directory, sort_order).unwrap_or_default();

        let tasks: Vec<Task<Message>> = gallery
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                update::load_thumbnail_task(index, entry.source().to_path_buf(), thumbnail_size)
            })
            .collect();

        let thumbnails = thumbnails::State::new(gallery.len());
        let app = App {
            gallery,
            lightbox: Lightbox::new(),
            overlay: overlay::Pane::new(),
            thumbnails,
            swipe: SwipeTracker::new(),
            cache: ImageCache::new(DEFAULT_CACHE_IMAGES),
            thumbnail_size,
            prefetch_enabled,
        };

        (app, Task::batch(tasks))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(
            update::UpdateContext {
                gallery: &self.gallery,
                lightbox: &mut self.lightbox,
                overlay: &mut self.overlay,
                thumbnails: &mut self.thumbnails,
                swipe: &mut self.swipe,
                cache: &mut self.cache,
                prefetch_enabled: self.prefetch_enabled,
            },
            message,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            overlay: &self.overlay,
            thumbnails: &self.thumbnails,
            thumbnail_size: self.thumbnail_size,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn title(&self) -> String {
        String::from("Iced Lightbox")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
