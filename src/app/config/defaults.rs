// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Thumbnails**: Thumbnail strip sizing
//! - **Double-click**: Detection window for the counted-click policy
//! - **Lightbox**: Overlay presentation

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default height of thumbnail strip images, in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 96.0;

/// Minimum allowed thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 48.0;

/// Maximum allowed thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 256.0;

// ==========================================================================
// Double-Click Defaults
// ==========================================================================

/// Default double-click detection window (in milliseconds).
pub const DEFAULT_DOUBLE_CLICK_WINDOW_MS: u64 = 400;

/// Minimum double-click window (in milliseconds).
pub const MIN_DOUBLE_CLICK_WINDOW_MS: u64 = 100;

/// Maximum double-click window (in milliseconds).
pub const MAX_DOUBLE_CLICK_WINDOW_MS: u64 = 1500;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Whether the `current/total` position counter is shown in the overlay.
pub const DEFAULT_SHOW_POSITION_COUNTER: bool = true;
