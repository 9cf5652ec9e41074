// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery_panel, lightbox_overlay, navbar};
use iced::keyboard;
use std::path::PathBuf;

/// Flags parsed from the command line by the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// UI language override (`--lang`).
    pub lang: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Positional path: a gallery manifest file or a directory to scan.
    pub path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A press inside the gallery panel at `index`.
    Gallery {
        index: usize,
        message: gallery_panel::Message,
    },
    /// A press on the lightbox overlay.
    Lightbox(lightbox_overlay::Message),
    Navbar(navbar::Message),
    /// A key press routed by the subscription (only while the lightbox is
    /// open).
    KeyPressed(keyboard::Key),
    /// Result from the open-folder dialog.
    OpenFolderDialogResult(Option<PathBuf>),
    /// Result from the open-manifest dialog.
    OpenManifestDialogResult(Option<PathBuf>),
}
