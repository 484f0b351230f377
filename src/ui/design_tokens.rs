// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the viewer widgets.
//!
//! ```
//! use pinch::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let panel = Color {
//!     a: opacity::PANEL,
//!     ..palette::BLACK
//! };
//! let gap = spacing::MD;
//! # let _ = (panel, gap);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const HANDLE: f32 = 0.6;
    /// Info panel and drawer backgrounds.
    pub const PANEL: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const BUTTON_WIDTH: f32 = 44.0;

    /// Chevron handle on the drawer's leading edge.
    pub const HANDLE_WIDTH: f32 = 24.0;
    pub const HANDLE_HEIGHT: f32 = 40.0;

    pub const THUMBNAIL_WIDTH: f32 = 80.0;

    /// Drawer width when fully open.
    pub const DRAWER_WIDTH: f32 = 260.0;
    /// Part of the drawer that stays visible when closed.
    pub const DRAWER_PEEK: f32 = 40.0;

    /// Inset between the page image and the canvas edges.
    pub const PAGE_INSET: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::PANEL > 0.0 && opacity::PANEL < 1.0);
    assert!(sizing::DRAWER_WIDTH > sizing::THUMBNAIL_WIDTH + sizing::DRAWER_PEEK);
    assert!(sizing::DRAWER_PEEK < sizing::DRAWER_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn closed_drawer_still_shows_handle() {
        assert!(sizing::DRAWER_PEEK >= sizing::HANDLE_WIDTH + spacing::XS * 2.0);
    }
}
