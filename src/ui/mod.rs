// SPDX-License-Identifier: MPL-2.0
//! UI components, styles, and theming.

pub mod design_tokens;
pub mod gallery_panel;
pub mod lightbox_overlay;
pub mod navbar;
pub mod styles;
pub mod theming;
