// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for gallery panels and the navbar.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Frame around a thumbnail; the active one carries the brand-color ring.
pub fn thumbnail(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let ring = if active {
            Border {
                color: palette::PRIMARY_500,
                width: border::ACTIVE_RING,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: border::ACTIVE_RING,
                radius: radius::SM.into(),
            }
        };

        container::Style {
            border: ring,
            ..container::Style::default()
        }
    }
}

/// Banner surface for document-load failures.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::THIN,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
