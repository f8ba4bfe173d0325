// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a modal image gallery (lightbox) viewer built with the
//! Iced GUI framework.
//!
//! The core — gallery scanning, the lightbox state machine, and the input
//! contract — is renderer-independent and can be driven against a mock
//! surface in tests. The `app` module wires that core to a real Iced window
//! with a thumbnail grid, keyboard navigation, and touch-swipe support.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod input;
pub mod lightbox;
pub mod loader;
pub mod prefetch;
pub mod ui;
