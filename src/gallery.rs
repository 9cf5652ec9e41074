// SPDX-License-Identifier: MPL-2.0
//! Gallery binder: turns document gallery nodes into interactive gallery
//! state.
//!
//! Binding happens once per document load. Each bound gallery owns the
//! full-resolution image list computed at bind time (thumbnails added to the
//! document afterwards are not tracked), the mutable main-photo slot, and
//! the active-thumbnail marker. Galleries are isolated from each other: the
//! marker and the main photo are per-gallery, only the lightbox overlay is
//! shared.

use crate::document::{Document, GalleryNode, ImageNode, ImageSource};
use crate::lightbox::OpenRequest;

/// The mutable main-photo slot of a gallery.
///
/// Thumbnail selection overwrites the displayed source, the alt text, and,
/// when the thumbnail carries one, the full-resolution attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainPhotoSlot {
    source: ImageSource,
    alt: String,
    full_src: Option<ImageSource>,
}

impl MainPhotoSlot {
    /// The source currently displayed in the slot.
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// The slot's full-resolution address, falling back to the displayed
    /// source.
    #[must_use]
    pub fn full_resolution(&self) -> &ImageSource {
        self.full_src.as_ref().unwrap_or(&self.source)
    }
}

/// One gallery after bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundGallery {
    title: Option<String>,
    nav_path: Option<String>,
    main_photo: Option<MainPhotoSlot>,
    thumbnails: Vec<ImageNode>,
    /// Full-resolution source per thumbnail, document order. Computed once
    /// at bind time and immutable thereafter.
    images: Vec<ImageSource>,
    active_thumbnail: Option<usize>,
}

impl BoundGallery {
    /// Binds a single gallery node.
    #[must_use]
    pub fn new(node: &GalleryNode) -> Self {
        let images = node
            .thumbnails
            .iter()
            .map(|thumbnail| thumbnail.full_resolution().clone())
            .collect();

        let main_photo = node.main_photo.as_ref().map(|photo| MainPhotoSlot {
            source: photo.src.clone(),
            alt: photo.alt.clone(),
            full_src: photo.full_src.clone(),
        });

        Self {
            title: node.title.clone(),
            nav_path: node.nav_path.clone(),
            main_photo,
            thumbnails: node.thumbnails.clone(),
            images,
            active_thumbnail: None,
        }
    }

    /// Applies a thumbnail selection: updates the main-photo slot (when the
    /// gallery has one) and moves the active marker onto the selected
    /// thumbnail. Without a main photo the marker stays where it was, which
    /// matches the page behavior this viewer reproduces.
    ///
    /// Out-of-range indices are ignored; returns whether the index was valid.
    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        let Some(thumbnail) = self.thumbnails.get(index) else {
            return false;
        };

        if let Some(main) = self.main_photo.as_mut() {
            main.source = thumbnail.full_resolution().clone();
            main.alt = thumbnail.alt.clone();
            if let Some(full) = &thumbnail.full_src {
                main.full_src = Some(full.clone());
            }
            self.active_thumbnail = Some(index);
        }

        true
    }

    /// Builds the open intent for a click on the main photo.
    ///
    /// The slot's full-resolution source is looked up in the image list;
    /// an untracked main photo is treated as the first image for navigation
    /// purposes. `None` when the gallery has no main photo.
    #[must_use]
    pub fn open_from_main_photo(&self) -> Option<OpenRequest> {
        let main = self.main_photo.as_ref()?;
        let source = main.full_resolution().clone();
        let index = self
            .images
            .iter()
            .position(|candidate| *candidate == source)
            .unwrap_or(0);

        Some(OpenRequest {
            source,
            index,
            images: self.images.clone(),
        })
    }

    /// Builds the open intent for a double-click on thumbnail `index`.
    /// `None` for out-of-range indices.
    #[must_use]
    pub fn open_from_thumbnail(&self, index: usize) -> Option<OpenRequest> {
        let thumbnail = self.thumbnails.get(index)?;

        Some(OpenRequest {
            source: thumbnail.full_resolution().clone(),
            index,
            images: self.images.clone(),
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn nav_path(&self) -> Option<&str> {
        self.nav_path.as_deref()
    }

    #[must_use]
    pub fn main_photo(&self) -> Option<&MainPhotoSlot> {
        self.main_photo.as_ref()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[ImageNode] {
        &self.thumbnails
    }

    /// The bind-time full-resolution image list.
    #[must_use]
    pub fn images(&self) -> &[ImageSource] {
        &self.images
    }

    #[must_use]
    pub fn active_thumbnail(&self) -> Option<usize> {
        self.active_thumbnail
    }
}

/// Binds every gallery node of a document, in document order.
#[must_use]
pub fn bind(document: &Document) -> Vec<BoundGallery> {
    document.galleries.iter().map(BoundGallery::new).collect()
}
