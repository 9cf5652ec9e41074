// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! All state mutation funnels through [`update`]: gallery-panel presses go
//! through the click classifier before they reach the gallery or lightbox
//! state machines, key presses are gated on the overlay being open, and
//! file-dialog results trigger a document reload.

use super::{App, Message};
use crate::document::{scanner, Document};
use crate::input::click::{ClickKind, ClickTarget};
use crate::ui::{gallery_panel, lightbox_overlay, navbar};
use iced::keyboard::{key::Named, Key};
use iced::Task;
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery { index, message } => {
            handle_gallery_message(app, index, message);
            Task::none()
        }
        Message::Lightbox(message) => {
            handle_lightbox_message(app, message);
            Task::none()
        }
        Message::KeyPressed(key) => {
            handle_key_press(app, key);
            Task::none()
        }
        Message::Navbar(message) => match navbar::update(message, &mut app.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::NavigateTo(path) => {
                app.current_path = path;
                Task::none()
            }
            navbar::Event::OpenFolder => {
                let title = app.i18n.tr("menu-open-folder");
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_title(&title)
                            .pick_folder()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::OpenFolderDialogResult,
                )
            }
            navbar::Event::OpenManifest => {
                let title = app.i18n.tr("menu-open-manifest");
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_title(&title)
                            .add_filter("TOML", &["toml"])
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::OpenManifestDialogResult,
                )
            }
        },
        Message::OpenFolderDialogResult(Some(path)) => {
            match scanner::scan_directory(&path, app.sort_order) {
                Ok(document) => app.install_document(document),
                Err(err) => app.report_load_error(&err),
            }
            Task::none()
        }
        Message::OpenManifestDialogResult(Some(path)) => {
            match Document::from_manifest_path(&path) {
                Ok(document) => app.install_document(document),
                Err(err) => app.report_load_error(&err),
            }
            Task::none()
        }
        Message::OpenFolderDialogResult(None) | Message::OpenManifestDialogResult(None) => {
            Task::none()
        }
    }
}

fn handle_gallery_message(app: &mut App, index: usize, message: gallery_panel::Message) {
    match message {
        gallery_panel::Message::MainPhotoPressed => {
            if let Some(request) = app
                .galleries
                .get(index)
                .and_then(crate::gallery::BoundGallery::open_from_main_photo)
            {
                tracing::debug!(gallery = index, "opening lightbox from main photo");
                app.lightbox.open(request);
            }
        }
        gallery_panel::Message::ThumbnailPressed(thumbnail) => {
            let kind = app.clicks.classify(
                ClickTarget {
                    gallery: index,
                    thumbnail,
                },
                Instant::now(),
            );

            let Some(gallery) = app.galleries.get_mut(index) else {
                return;
            };

            // A thumbnail press always selects; only the second press of a
            // double click additionally opens the lightbox.
            gallery.select_thumbnail(thumbnail);

            if kind == ClickKind::Double {
                if let Some(request) = gallery.open_from_thumbnail(thumbnail) {
                    tracing::debug!(
                        gallery = index,
                        thumbnail,
                        "opening lightbox from thumbnail"
                    );
                    app.lightbox.open(request);
                }
            }
        }
    }
}

fn handle_lightbox_message(app: &mut App, message: lightbox_overlay::Message) {
    match message {
        lightbox_overlay::Message::ClosePressed | lightbox_overlay::Message::BackdropPressed => {
            tracing::debug!("closing lightbox");
            app.lightbox.close();
        }
        lightbox_overlay::Message::PreviousPressed => app.lightbox.show_previous(),
        lightbox_overlay::Message::NextPressed => app.lightbox.show_next(),
    }
}

fn handle_key_press(app: &mut App, key: Key) {
    // Keys only act while the overlay is open: Escape with the lightbox
    // closed must not change any state.
    if !app.lightbox.is_open() {
        return;
    }

    match key {
        Key::Named(Named::Escape) => {
            tracing::debug!("closing lightbox");
            app.lightbox.close();
        }
        Key::Named(Named::ArrowLeft) => app.lightbox.show_previous(),
        Key::Named(Named::ArrowRight) => app.lightbox.show_next(),
        _ => {}
    }
}
