// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PINCH_CONFIG_DIR`, `PINCH_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Pinch";

/// Directory searched for page images when nothing else is configured.
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PINCH_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "PINCH_ASSETS_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored with a warning; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`:
/// - Linux: `~/.config/Pinch/`
/// - macOS: `~/Library/Application Support/Pinch/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Pinch\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory page images are loaded from.
///
/// # Resolution Order
///
/// 1. `cli_path` (`--assets-dir`)
/// 2. `configured` (`[general] assets_dir` in `settings.toml`)
/// 3. `PINCH_ASSETS_DIR` environment variable (if set and non-empty)
/// 4. `assets/` relative to the working directory
#[must_use]
pub fn resolve_assets_dir(cli_path: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    cli_path
        .or(configured)
        .or_else(|| non_empty_env(ENV_ASSETS_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}
