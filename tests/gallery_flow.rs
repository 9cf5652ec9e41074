// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow over the library API: document -> binder -> click
//! classifier -> lightbox controller.

use iced_gallery::document::scanner::{self, SortOrder};
use iced_gallery::document::Document;
use iced_gallery::gallery;
use iced_gallery::input::click::{ClickClassifier, ClickKind, ClickTarget, DoubleClickWindow};
use iced_gallery::lightbox::Lightbox;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const MANIFEST: &str = r#"
title = "Portfolio"

[[gallery]]
title = "Venue"
nav-path = "/venue"

[gallery.main-photo]
src = "a.jpg"
alt = "A"

[[gallery.thumbnail]]
src = "a.jpg"
alt = "A"

[[gallery.thumbnail]]
src = "b.jpg"
alt = "B"

[[gallery.thumbnail]]
src = "c.jpg"
alt = "C"
"#;

#[test]
fn manifest_to_lightbox_flow() {
    let document = Document::from_manifest_str(MANIFEST).expect("manifest parse failed");
    let mut galleries = gallery::bind(&document);
    let mut clicks = ClickClassifier::new(DoubleClickWindow::default());
    let mut lightbox = Lightbox::new();

    let target = ClickTarget {
        gallery: 0,
        thumbnail: 1,
    };
    let now = Instant::now();

    // First press on thumbnail B: selection only.
    assert_eq!(clicks.classify(target, now), ClickKind::Single);
    galleries[0].select_thumbnail(1);

    let main = galleries[0].main_photo().expect("main photo present");
    assert_eq!(main.source().as_str(), "b.jpg");
    assert_eq!(galleries[0].active_thumbnail(), Some(1));
    assert!(!lightbox.is_open());

    // Second press within the window: the double click opens the lightbox.
    let kind = clicks.classify(target, now + Duration::from_millis(150));
    assert_eq!(kind, ClickKind::Double);
    galleries[0].select_thumbnail(1);

    let request = galleries[0]
        .open_from_thumbnail(1)
        .expect("open request expected");
    lightbox.open(request);

    assert!(lightbox.is_open());
    assert_eq!(lightbox.current_index(), 1);
    assert!(lightbox.controls_visible());
    assert_eq!(
        lightbox.displayed_image().map(|s| s.as_str()),
        Some("b.jpg")
    );

    // Navigate all the way around the gallery.
    lightbox.show_next();
    assert_eq!(lightbox.current_index(), 2);
    lightbox.show_next();
    assert_eq!(lightbox.current_index(), 0);
    lightbox.show_previous();
    assert_eq!(lightbox.current_index(), 2);

    lightbox.close();
    assert!(!lightbox.is_open());
    // The selection made earlier is untouched by overlay state.
    assert_eq!(galleries[0].active_thumbnail(), Some(1));
}

#[test]
fn main_photo_opens_after_selection_tracks_position() {
    let document = Document::from_manifest_str(MANIFEST).expect("manifest parse failed");
    let mut galleries = gallery::bind(&document);
    let mut lightbox = Lightbox::new();

    galleries[0].select_thumbnail(2);
    let request = galleries[0]
        .open_from_main_photo()
        .expect("open request expected");
    lightbox.open(request);

    assert_eq!(lightbox.current_index(), 2);
    assert_eq!(
        lightbox.displayed_image().map(|s| s.as_str()),
        Some("c.jpg")
    );
}

#[test]
fn scanned_directory_flows_into_the_binder() {
    let root = tempdir().expect("failed to create temp dir");
    let shoot = root.path().join("shoot");
    std::fs::create_dir(&shoot).expect("mkdir failed");
    for name in ["one.jpg", "two.jpg", "three.jpg"] {
        std::fs::write(shoot.join(name), b"fake image data").expect("write failed");
    }

    let document =
        scanner::scan_directory(root.path(), SortOrder::Alphabetical).expect("scan failed");
    let galleries = gallery::bind(&document);

    assert_eq!(galleries.len(), 1);
    assert_eq!(galleries[0].images().len(), 3);
    assert!(galleries[0].main_photo().is_some());

    let mut lightbox = Lightbox::new();
    lightbox.open(
        galleries[0]
            .open_from_main_photo()
            .expect("open request expected"),
    );

    // The main photo is the first scanned image, so it resolves to index 0.
    assert_eq!(lightbox.current_index(), 0);
    assert!(lightbox.controls_visible());
}

#[test]
fn gallery_without_thumbnails_suppresses_navigation() {
    let manifest = r#"
[[gallery]]
[gallery.main-photo]
src = "hero.jpg"
alt = "Hero"
"#;

    let document = Document::from_manifest_str(manifest).expect("manifest parse failed");
    let galleries = gallery::bind(&document);
    let mut lightbox = Lightbox::new();

    let request = galleries[0]
        .open_from_main_photo()
        .expect("open request expected");
    assert!(request.images.is_empty());

    lightbox.open(request);
    assert!(lightbox.is_open());
    assert!(!lightbox.controls_visible());

    lightbox.show_next();
    assert_eq!(lightbox.current_index(), 0);
}
