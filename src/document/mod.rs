// SPDX-License-Identifier: MPL-2.0
//! Gallery document model.
//!
//! A [`Document`] is the structural input consumed by the gallery binder: an
//! ordered list of gallery nodes, each holding an optional main-photo node
//! and zero or more thumbnail nodes. Documents come from one of two
//! producers, a TOML manifest (this module) or a directory scan
//! ([`scanner`]), and the rest of the application treats both identically.
//!
//! # Manifest format
//!
//! ```toml
//! title = "Portfolio"
//!
//! [[gallery]]
//! title = "Venue"
//! nav-path = "/venue"
//!
//! [gallery.main-photo]
//! src = "venue/thumbs/hall.jpg"
//! full-src = "venue/hall.jpg"
//! alt = "Main hall"
//!
//! [[gallery.thumbnail]]
//! src = "venue/thumbs/hall.jpg"
//! full-src = "venue/hall.jpg"
//! alt = "Main hall"
//! ```
//!
//! Relative sources are resolved against the manifest's directory when a
//! document is loaded through [`Document::from_manifest_path`].

pub mod scanner;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Address of an image, as rendered by the image widget.
///
/// The wrapped string is a filesystem path; equality on sources is what the
/// lightbox uses to locate a main photo inside a gallery's image list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageSource {
    fn from(source: &str) -> Self {
        Self(source.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(source: String) -> Self {
        Self(source)
    }
}

/// A single image slot: display source, optional full-resolution source, and
/// alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageNode {
    pub src: ImageSource,
    /// Full-resolution address shown at large size; falls back to `src`.
    #[serde(default)]
    pub full_src: Option<ImageSource>,
    #[serde(default)]
    pub alt: String,
}

impl ImageNode {
    /// The address to show at full size: `full-src` when present, otherwise
    /// the display source itself.
    #[must_use]
    pub fn full_resolution(&self) -> &ImageSource {
        self.full_src.as_ref().unwrap_or(&self.src)
    }
}

/// One gallery region: an optional main photo plus ordered thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryNode {
    #[serde(default)]
    pub title: Option<String>,
    /// Path used by the navigation bar's active-link matching.
    #[serde(default)]
    pub nav_path: Option<String>,
    #[serde(default)]
    pub main_photo: Option<ImageNode>,
    #[serde(default, rename = "thumbnail")]
    pub thumbnails: Vec<ImageNode>,
}

/// The whole gallery document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "gallery")]
    pub galleries: Vec<GalleryNode>,
}

impl Document {
    /// Parses a manifest from TOML text. Sources are kept exactly as
    /// written; use [`Document::from_manifest_path`] to also resolve
    /// relative sources.
    pub fn from_manifest_str(manifest: &str) -> Result<Self> {
        toml::from_str(manifest).map_err(|err| Error::Document(err.to_string()))
    }

    /// Loads a manifest file and resolves relative image sources against the
    /// manifest's directory.
    pub fn from_manifest_path(path: &Path) -> Result<Self> {
        let manifest = std::fs::read_to_string(path)?;
        let mut document = Self::from_manifest_str(&manifest)?;

        if let Some(base) = path.parent() {
            document.resolve_sources(base);
        }

        Ok(document)
    }

    /// Rewrites every relative image source as `base/<source>`.
    fn resolve_sources(&mut self, base: &Path) {
        let resolve = |source: &mut ImageSource| {
            if Path::new(&source.0).is_relative() {
                source.0 = base.join(&source.0).to_string_lossy().into_owned();
            }
        };

        for gallery in &mut self.galleries {
            for node in gallery
                .main_photo
                .iter_mut()
                .chain(gallery.thumbnails.iter_mut())
            {
                resolve(&mut node.src);
                if let Some(full) = &mut node.full_src {
                    resolve(full);
                }
            }
        }
    }

    /// Total number of thumbnails across all galleries.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.galleries.iter().map(|g| g.thumbnails.len()).sum()
    }
}
