// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Single source of truth for colors, opacity levels, spacing, sizing,
//! typography, and border radii used across the UI. Tokens are designed to
//! stay consistent; maintain the ratios when modifying (e.g. `MD = XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (indigo scale, used for the active thumbnail ring and
    // active navigation links)
    pub const PRIMARY_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.28, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.21, 0.27);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Lightbox backdrop.
    pub const OVERLAY_STRONG: f32 = 0.9;
    /// Hovered overlay controls.
    pub const OVERLAY_MEDIUM: f32 = 0.7;
    /// Resting overlay controls.
    pub const OVERLAY_CONTROL: f32 = 0.5;
    /// Subtle overlay borders.
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    /// Panel surfaces.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (8px-based scale)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of the round lightbox controls.
    pub const CONTROL: f32 = 40.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_LG: f32 = 28.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const THIN: f32 = 1.0;
    /// Width of the active-thumbnail ring.
    pub const ACTIVE_RING: f32 = 2.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Fully round (pill/circle) corners.
    pub const FULL: f32 = 999.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn opacity_levels_are_ordered() {
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_CONTROL);
        assert!(opacity::OVERLAY_CONTROL < opacity::OVERLAY_MEDIUM);
        assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    }

    #[test]
    fn palette_colors_are_opaque() {
        assert_eq!(palette::PRIMARY_500.a, 1.0);
        assert_eq!(palette::GRAY_900.a, 1.0);
    }
}
