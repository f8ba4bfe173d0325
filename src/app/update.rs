// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every user-facing message is translated through the `input` contract into
//! an [`Action`] and applied to the lightbox, with the overlay pane as the
//! surface. The only other work here is the async plumbing for thumbnail and
//! full-size image decoding.

use super::Message;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::input::{self, Action, PointerTarget, SwipeTracker};
use crate::lightbox::Lightbox;
use crate::loader;
use crate::prefetch::{self, ImageCache};
use crate::ui::{overlay, thumbnails};
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a Gallery,
    pub lightbox: &'a mut Lightbox,
    pub overlay: &'a mut overlay::Pane,
    pub thumbnails: &'a mut thumbnails::State,
    pub swipe: &'a mut SwipeTracker,
    pub cache: &'a mut ImageCache,
    pub prefetch_enabled: bool,
}

pub fn update(mut ctx: UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Thumbnails(thumbnails::Message::Pressed(index)) => {
            let action = input::click_action(PointerTarget::Thumbnail(index));
            apply_action(&mut ctx, action)
        }
        Message::Overlay(message) => {
            let action = overlay_action(&message);
            apply_action(&mut ctx, action)
        }
        Message::KeyPressed(key) => {
            let action = input::key_action(key, ctx.lightbox.is_open());
            apply_action(&mut ctx, action)
        }
        Message::TouchStarted(x) => {
            // gestures only belong to the lightbox while it is shown
            if ctx.lightbox.is_open() {
                ctx.swipe.begin(x);
            }
            Task::none()
        }
        Message::TouchEnded(x) => {
            let action = if ctx.lightbox.is_open() {
                ctx.swipe.finish(x)
            } else {
                ctx.swipe.cancel();
                None
            };
            apply_action(&mut ctx, action)
        }
        Message::TouchCancelled => {
            ctx.swipe.cancel();
            Task::none()
        }
        Message::ThumbnailLoaded { index, result } => {
            // a failed decode leaves the alt-text placeholder cell in place
            if let Ok(handle) = result {
                ctx.thumbnails.set_handle(index, handle);
            }
            Task::none()
        }
        Message::ImageLoaded { path, result } => {
            if let Ok(handle) = result {
                ctx.cache.insert(path.clone(), handle.clone());
                // stale results (entry no longer displayed) only warm the cache
                if ctx.overlay.source() == Some(path.as_path()) {
                    ctx.overlay.set_image(handle);
                }
            }
            Task::none()
        }
    }
}

/// Maps an overlay message to the pointer target it names and translates it.
fn overlay_action(message: &overlay::Message) -> Option<Action> {
    match message {
        overlay::Message::ClosePressed => input::click_action(PointerTarget::CloseControl),
        overlay::Message::NextPressed => input::click_action(PointerTarget::NextControl),
        overlay::Message::PreviousPressed => input::click_action(PointerTarget::PreviousControl),
        overlay::Message::BackdropPressed => input::click_action(PointerTarget::Backdrop),
        overlay::Message::ContentPressed => input::click_action(PointerTarget::Image),
        overlay::Message::ContentRightPressed => input::context_menu_action(PointerTarget::Image),
    }
}

/// Applies a translated action and kicks off the follow-up image loading.
fn apply_action(ctx: &mut UpdateContext<'_>, action: Option<Action>) -> Task<Message> {
    let Some(action) = action else {
        return Task::none();
    };

    ctx.lightbox.apply(action, ctx.gallery, ctx.overlay);

    if !ctx.lightbox.is_open() {
        ctx.swipe.cancel();
        return Task::none();
    }

    // serve the displayed entry from the cache when it is already decoded
    let displayed = ctx.overlay.source().map(std::path::Path::to_path_buf);
    if let Some(path) = displayed {
        if let Some(handle) = ctx.cache.get(&path) {
            ctx.overlay.set_image(handle);
        }
    }

    if !ctx.prefetch_enabled {
        return Task::none();
    }
    warm_neighbors(ctx)
}

/// Decodes the displayed entry and its wrap-around neighbors off-thread,
/// skipping anything the cache already holds.
fn warm_neighbors(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let tasks: Vec<Task<Message>> =
        prefetch::neighbor_paths(ctx.gallery, ctx.lightbox.current_index())
            .into_iter()
            .filter(|path| !ctx.cache.contains(path))
            .map(load_image_task)
            .collect();
    Task::batch(tasks)
}

/// Spawns a blocking decode of a full-size image.
pub(super) fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = decode_off_thread({
                let path = path.clone();
                move || loader::load_image(&path)
            })
            .await;
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

/// Spawns a blocking decode of one thumbnail cell.
pub(super) fn load_thumbnail_task(index: usize, path: PathBuf, size: u32) -> Task<Message> {
    Task::perform(
        decode_off_thread(move || loader::load_thumbnail(&path, size)),
        move |result| Message::ThumbnailLoaded { index, result },
    )
}

async fn decode_off_thread<F>(decode: F) -> Result<Handle, Error>
where
    F: FnOnce() -> Result<Handle, Error> + Send + 'static,
{
    tokio::task::spawn_blocking(decode)
        .await
        .map_err(|err| Error::Image(err.to_string()))?
}
