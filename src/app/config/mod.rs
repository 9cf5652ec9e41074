// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Gallery presentation (sort order, thumbnail size,
//!   double-click window)
//! - `[lightbox]` - Overlay presentation
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory

pub mod defaults;

// Re-export all default constants so callers have a single import path.
pub use defaults::*;

use crate::app::paths;
use crate::document::scanner::SortOrder;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryConfig {
    /// Image sorting order applied by the directory scanner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Height of thumbnail strip images, in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<f32>,

    /// Double-click detection window, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_click_window_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            double_click_window_ms: Some(DEFAULT_DOUBLE_CLICK_WINDOW_MS),
        }
    }
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LightboxConfig {
    /// Whether the `current/total` position counter is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_position_counter: Option<bool>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            show_position_counter: Some(DEFAULT_SHOW_POSITION_COUNTER),
        }
    }
}

/// The whole user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

/// Returns the path of the config file inside the resolved config directory.
#[must_use]
pub fn config_file_path() -> PathBuf {
    paths::config_dir().join(CONFIG_FILE)
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults silently; an unreadable or unparsable
/// file yields the defaults plus a warning message for the caller to surface.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_from_path(&config_file_path())
}

/// Loads the configuration from an explicit path (used by tests).
#[must_use]
pub fn load_from_path(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            return (
                Config::default(),
                Some(format!("could not read {}: {err}", path.display())),
            );
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("could not parse {}: {err}", path.display())),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_to_path(config, &config_file_path())
}

/// Saves the configuration to an explicit path (used by tests).
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
