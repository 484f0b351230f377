// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the viewer.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the viewer surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Area behind the page image.
    pub canvas_background: Color,
    /// Drawer and info panel background.
    pub panel_background: Color,
    pub panel_text: Color,
    pub handle: Color,
    /// Outline around the active thumbnail.
    pub selection: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            canvas_background: palette::GRAY_100,
            panel_background: Color {
                a: opacity::PANEL,
                ..palette::WHITE
            },
            panel_text: palette::GRAY_900,
            handle: Color {
                a: opacity::HANDLE,
                ..palette::GRAY_700
            },
            selection: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            canvas_background: palette::GRAY_900,
            panel_background: Color {
                a: opacity::PANEL,
                ..palette::BLACK
            },
            panel_text: palette::WHITE,
            handle: Color {
                a: opacity::HANDLE,
                ..palette::GRAY_200
            },
            selection: palette::PRIMARY_400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the colors a mode maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Built-in iced theme for standard widgets.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
