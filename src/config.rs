// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.thumbnail_size = Some(320);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

/// Order in which a scanned directory becomes the navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphabetical" | "name" => Ok(SortOrder::Alphabetical),
            "modified" | "date" | "modified-date" => Ok(SortOrder::ModifiedDate),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
    /// Edge length of a thumbnail cell, in logical pixels.
    #[serde(default)]
    pub thumbnail_size: Option<u32>,
    /// Whether neighboring full-size images are decoded ahead of navigation.
    #[serde(default)]
    pub prefetch: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_order: None,
            thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
            prefetch: Some(true),
        }
    }
}

pub const DEFAULT_THUMBNAIL_SIZE: u32 = 240;
pub const MIN_THUMBNAIL_SIZE: u32 = 96;
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Ensures thumbnail sizes stay inside the supported range so persisted
/// configs cannot request unreadable or pathological cell sizes.
pub fn clamp_thumbnail_size(value: u32) -> u32 {
    value.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
