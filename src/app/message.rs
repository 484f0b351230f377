// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Animation frame while a transition is running.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PINCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory holding the page images.
    /// Takes precedence over `[general] assets_dir` and `PINCH_ASSETS_DIR`.
    pub assets_dir: Option<String>,
    /// Optional id of the page shown first.
    pub page: Option<u32>,
}
