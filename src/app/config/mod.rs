// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode and assets directory
//! - `[animation]` - Transition durations in milliseconds
//! - `[gestures]` - Double-tap, drag and wheel thresholds
//! - `[[pages]]` - Optional page catalog replacing the built-in one
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PINCH_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinch::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! let animation = config.animation_settings();
//! # let _ = animation;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::page::{Page, PageList};
use crate::error::{Error, Result};
use crate::ui::state::{AnimationSettings, GestureSettings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Directory holding the page images and their thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            assets_dir: None,
        }
    }
}

/// Animation durations, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Linear follow while dragging or pinching.
    #[serde(default = "default_transform_ms", skip_serializing_if = "Option::is_none")]
    pub transform_ms: Option<u64>,

    /// Spring settle for double-tap and reset.
    #[serde(default = "default_spring_ms", skip_serializing_if = "Option::is_none")]
    pub spring_ms: Option<u64>,

    /// Ease used by the step buttons.
    #[serde(default = "default_ease_ms", skip_serializing_if = "Option::is_none")]
    pub ease_ms: Option<u64>,

    /// Drawer slide.
    #[serde(default = "default_drawer_ms", skip_serializing_if = "Option::is_none")]
    pub drawer_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transform_ms: default_transform_ms(),
            spring_ms: default_spring_ms(),
            ease_ms: default_ease_ms(),
            drawer_ms: default_drawer_ms(),
        }
    }
}

/// Gesture recognition thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Maximum delay between the two taps of a double-tap (ms).
    #[serde(default = "default_double_tap_ms", skip_serializing_if = "Option::is_none")]
    pub double_tap_ms: Option<u64>,

    /// Maximum distance between the two taps of a double-tap (px).
    #[serde(
        default = "default_double_tap_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_distance: Option<f32>,

    /// Distance a press must travel before it becomes a drag (px).
    #[serde(default = "default_drag_slop", skip_serializing_if = "Option::is_none")]
    pub drag_slop: Option<f32>,

    /// Wheel silence that ends a wheel magnification (ms).
    #[serde(default = "default_wheel_idle_ms", skip_serializing_if = "Option::is_none")]
    pub wheel_idle_ms: Option<u64>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            double_tap_ms: default_double_tap_ms(),
            double_tap_distance: default_double_tap_distance(),
            drag_slop: default_drag_slop(),
            wheel_idle_ms: default_wheel_idle_ms(),
        }
    }
}

/// One entry of the `[[pages]]` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub id: u32,
    pub image_name: String,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Animation durations.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Gesture thresholds.
    #[serde(default)]
    pub gestures: GesturesConfig,

    /// Page catalog; empty means the built-in pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageConfig>,
}

impl Config {
    /// Animation durations with missing values defaulted and every value
    /// capped at [`MAX_ANIMATION_MS`].
    #[must_use]
    pub fn animation_settings(&self) -> AnimationSettings {
        let millis = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_ANIMATION_MS))
        };

        AnimationSettings {
            transform: millis(self.animation.transform_ms, DEFAULT_TRANSFORM_MS),
            spring: millis(self.animation.spring_ms, DEFAULT_SPRING_MS),
            ease: millis(self.animation.ease_ms, DEFAULT_EASE_MS),
            drawer: millis(self.animation.drawer_ms, DEFAULT_DRAWER_MS),
        }
    }

    /// Gesture thresholds with missing values defaulted and every value
    /// clamped into its supported range.
    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        let distance = |value: Option<f32>, default: f32| {
            let value = value.unwrap_or(default);
            if value.is_finite() {
                value.clamp(0.0, MAX_GESTURE_DISTANCE)
            } else {
                default
            }
        };

        GestureSettings {
            double_tap: Duration::from_millis(
                self.gestures
                    .double_tap_ms
                    .unwrap_or(DEFAULT_DOUBLE_TAP_MS)
                    .clamp(MIN_DOUBLE_TAP_MS, MAX_DOUBLE_TAP_MS),
            ),
            double_tap_distance: distance(
                self.gestures.double_tap_distance,
                DEFAULT_DOUBLE_TAP_DISTANCE,
            ),
            drag_slop: distance(self.gestures.drag_slop, DEFAULT_DRAG_SLOP),
            wheel_idle: Duration::from_millis(
                self.gestures
                    .wheel_idle_ms
                    .unwrap_or(DEFAULT_WHEEL_IDLE_MS)
                    .clamp(MIN_WHEEL_IDLE_MS, MAX_WHEEL_IDLE_MS),
            ),
        }
    }

    /// The configured page catalog, or the built-in one when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configured pages repeat an id.
    pub fn page_list(&self) -> Result<PageList> {
        if self.pages.is_empty() {
            return Ok(PageList::builtin());
        }

        let pages = self
            .pages
            .iter()
            .map(|page| Page::new(page.id, page.image_name.clone()))
            .collect();
        Ok(PageList::new(pages)?)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_transform_ms() -> Option<u64> {
    Some(DEFAULT_TRANSFORM_MS)
}

fn default_spring_ms() -> Option<u64> {
    Some(DEFAULT_SPRING_MS)
}

fn default_ease_ms() -> Option<u64> {
    Some(DEFAULT_EASE_MS)
}

fn default_drawer_ms() -> Option<u64> {
    Some(DEFAULT_DRAWER_MS)
}

fn default_double_tap_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_MS)
}

fn default_double_tap_distance() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_DISTANCE)
}

fn default_drag_slop() -> Option<f32> {
    Some(DEFAULT_DRAG_SLOP)
}

fn default_wheel_idle_ms() -> Option<u64> {
    Some(DEFAULT_WHEEL_IDLE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!(
                            "failed to load {}: {}; using defaults",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
