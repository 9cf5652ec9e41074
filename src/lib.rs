// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery viewer built with the Iced GUI framework.
//!
//! It renders one or more galleries (a main photo plus a thumbnail strip),
//! all sharing a single full-screen lightbox overlay with keyboard
//! navigation, and demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

pub mod app;
pub mod document;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod input;
pub mod lightbox;
pub mod ui;
