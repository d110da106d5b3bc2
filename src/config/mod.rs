// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[sidebar]` - Metadata sidebar visibility, width and EXIF section
//!
//! # Examples
//!
//! ```no_run
//! use lens_sidebar::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.sidebar.visible = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Metadata sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    /// Whether the sidebar is shown.
    #[serde(default = "default_visible", skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Sidebar width in logical pixels.
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Whether to show the EXIF details section.
    #[serde(
        default = "default_show_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_metadata: Option<bool>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
            width: default_width(),
            show_metadata: default_show_metadata(),
        }
    }
}

impl SidebarConfig {
    /// Sidebar width clamped to the supported range.
    pub fn effective_width(&self) -> f32 {
        self.width
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
            .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,
}

fn default_visible() -> Option<bool> {
    Some(DEFAULT_SIDEBAR_VISIBLE)
}

fn default_width() -> Option<f32> {
    Some(DEFAULT_SIDEBAR_WIDTH)
}

fn default_show_metadata() -> Option<bool> {
    Some(DEFAULT_SHOW_METADATA)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {}", path.display(), err);
                    return (Config::default(), Some("warning-config-load".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Malformed TOML falls back to the default configuration.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring malformed {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
