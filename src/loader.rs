// SPDX-License-Identifier: MPL-2.0
//! Decoding helpers that turn image files into Iced widget handles.
//!
//! Decoding happens on blocking tasks off the UI thread; these functions are
//! the synchronous leaf work.

use crate::error::Result;
use iced::widget::image::Handle;
use std::path::Path;

/// Decodes a full-size image into an RGBA handle.
pub fn load_image(path: &Path) -> Result<Handle> {
    let image = image_rs::open(path)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Decodes an image and downscales it to fit a square thumbnail cell,
/// preserving the aspect ratio.
pub fn load_thumbnail(path: &Path, size: u32) -> Result<Handle> {
    let image = image_rs::open(path)?;
    let thumbnail = image.thumbnail(size, size);
    let rgba = thumbnail.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
        image.save(&path).expect("failed to write test png");
        path
    }

    #[test]
    fn load_image_decodes_a_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "full.png", 8, 6);

        load_image(&path).expect("decode should succeed");
    }

    #[test]
    fn load_thumbnail_never_exceeds_the_cell() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(temp_dir.path(), "wide.png", 400, 100);

        // Only checks that downscaling succeeds; the handle does not expose
        // its dimensions, so the size contract is covered via image_rs here.
        load_thumbnail(&path, 100).expect("thumbnail should succeed");
        let scaled = image_rs::open(&path)
            .expect("reopen should succeed")
            .thumbnail(100, 100);
        assert!(scaled.width() <= 100 && scaled.height() <= 100);
    }

    #[test]
    fn load_image_reports_undecodable_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").expect("failed to write file");

        assert!(matches!(load_image(&path), Err(Error::Image(_))));
    }
}
