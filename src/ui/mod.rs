// SPDX-License-Identifier: MPL-2.0
//! UI components: the thumbnail grid and the lightbox overlay.

pub mod overlay;
pub mod thumbnails;
