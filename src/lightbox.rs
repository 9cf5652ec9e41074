// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the single full-screen viewer shared by every
//! gallery on the page.
//!
//! The controller is the sole owner of lightbox state and exposes
//! `open` / `close` / `show_next` / `show_previous` as its only mutators,
//! so there is exactly one source of truth for the current index and image
//! list no matter which gallery (or which affordance within a gallery)
//! triggered the open.

use crate::document::ImageSource;

/// A well-formed "open the lightbox" intent.
///
/// Both entry points (clicking a main photo, double-clicking a thumbnail)
/// build one of these and go through [`Lightbox::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// The image to display immediately.
    pub source: ImageSource,
    /// Position of `source` within `images`.
    pub index: usize,
    /// The gallery's full-resolution image list, in document order.
    pub images: Vec<ImageSource>,
}

/// Transient viewing state of the shared overlay.
///
/// Created once at startup and never destroyed: `open` overwrites the image
/// list and index, `close` merely hides the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    is_open: bool,
    current_index: usize,
    displayed: Option<ImageSource>,
    images: Vec<ImageSource>,
}

impl Lightbox {
    /// Creates a closed, empty lightbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the overlay on the requested image.
    ///
    /// Replaces the image list and index unconditionally (overwrite, not
    /// merge), so opening while already open is well-defined. An empty
    /// image list is accepted: navigation is simply suppressed. An
    /// out-of-range index is clamped into range rather than rejected.
    pub fn open(&mut self, request: OpenRequest) {
        let OpenRequest {
            source,
            index,
            images,
        } = request;

        self.current_index = if images.is_empty() {
            0
        } else {
            index.min(images.len() - 1)
        };
        self.images = images;
        self.displayed = Some(source);
        self.is_open = true;
    }

    /// Hides the overlay. Idempotent; the image list and index survive so a
    /// later open starts from a consistent state.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Advances to the next image, wrapping past the end.
    ///
    /// No-op when the list holds at most one image. Never changes `is_open`
    /// or the image list.
    pub fn show_next(&mut self) {
        if self.images.len() <= 1 {
            return;
        }

        self.current_index = (self.current_index + 1) % self.images.len();
        self.displayed = Some(self.images[self.current_index].clone());
    }

    /// Steps back to the previous image, wrapping past the start.
    ///
    /// No-op when the list holds at most one image. Never changes `is_open`
    /// or the image list.
    pub fn show_previous(&mut self) {
        if self.images.len() <= 1 {
            return;
        }

        self.current_index =
            (self.current_index + self.images.len() - 1) % self.images.len();
        self.displayed = Some(self.images[self.current_index].clone());
    }

    /// Whether the overlay is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether prev/next controls should be rendered.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.images.len() > 1
    }

    /// The image currently shown in the overlay, if any.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&ImageSource> {
        self.displayed.as_ref()
    }

    /// Current position in the image list (0-indexed).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of images in the current list.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
