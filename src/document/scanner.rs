// SPDX-License-Identifier: MPL-2.0
//! Directory scanner producing a gallery document from a folder tree.
//!
//! Every subdirectory of the scanned root that contains supported images
//! becomes one gallery (thumbnails in the configured sort order, the first
//! image doubling as the main photo); images directly in the root form an
//! additional gallery. Unsupported and unreadable entries are skipped.

use crate::document::{Document, GalleryNode, ImageNode, ImageSource};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Sorting applied to the images of each scanned gallery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// Image formats the viewer hands to the platform image widget.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Checks whether a path carries a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scans `root` and builds a gallery document from its contents.
///
/// Returns an error only when the root directory itself cannot be read;
/// unreadable subdirectories are skipped.
pub fn scan_directory(root: &Path, sort_order: SortOrder) -> Result<Document> {
    let mut subdirectories = Vec::new();
    let mut root_images = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            subdirectories.push(path);
        } else if path.is_file() && is_supported_image(&path) {
            root_images.push(path);
        }
    }

    // Galleries appear in directory-name order regardless of image sorting.
    subdirectories.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    let mut galleries = Vec::new();

    for directory in subdirectories {
        let Ok(entries) = std::fs::read_dir(&directory) else {
            tracing::warn!(directory = %directory.display(), "skipping unreadable directory");
            continue;
        };

        let mut images: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect();

        if images.is_empty() {
            continue;
        }

        sort_image_files(&mut images, sort_order);

        let name = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        galleries.push(gallery_from_images(
            Some(name.clone()),
            Some(format!("/{}", slug(&name))),
            &images,
        ));
    }

    if !root_images.is_empty() {
        sort_image_files(&mut root_images, sort_order);
        // The root gallery has no nav path; it is only listed on the home view.
        galleries.push(gallery_from_images(None, None, &root_images));
    }

    let title = root.file_name().map(|n| n.to_string_lossy().into_owned());

    Ok(Document { title, galleries })
}

/// Builds one gallery node: every image becomes a thumbnail and the first
/// image doubles as the main photo.
fn gallery_from_images(
    title: Option<String>,
    nav_path: Option<String>,
    images: &[PathBuf],
) -> GalleryNode {
    let thumbnails: Vec<ImageNode> = images
        .iter()
        .map(|path| ImageNode {
            src: ImageSource::new(path.to_string_lossy().into_owned()),
            full_src: None,
            alt: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })
        .collect();

    GalleryNode {
        title,
        nav_path,
        main_photo: thumbnails.first().cloned(),
        thumbnails,
    }
}

fn sort_image_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by_key(|path| {
                path.file_name()
                    .map(|n| n.to_string_lossy().to_lowercase())
                    .unwrap_or_default()
            });
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| modified_time(path));
        }
        SortOrder::CreatedDate => {
            files.sort_by_key(|path| created_time(path));
        }
    }
}

fn modified_time(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn created_time(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|meta| meta.created())
        .unwrap_or_else(|_| modified_time(path))
}

/// Lowercases a directory name into a navigation path segment.
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
