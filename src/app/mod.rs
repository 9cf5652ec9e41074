// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the galleries and the
//! lightbox overlay.
//!
//! The `App` struct wires together the domains (gallery document, bound
//! galleries, lightbox, localization) and translates messages into state
//! transitions. This file intentionally keeps policy decisions (window
//! sizing, config application, document installation) close to the main
//! update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::document::scanner::{self, SortOrder};
use crate::document::Document;
use crate::error::Error;
use crate::gallery::{self, BoundGallery};
use crate::i18n::fluent::I18n;
use crate::input::click::{ClickClassifier, DoubleClickWindow};
use crate::lightbox::Lightbox;
use crate::ui::navbar::{self, NavLink};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging the gallery document, the lightbox
/// controller, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    document_title: Option<String>,
    galleries: Vec<BoundGallery>,
    /// The single overlay shared by every gallery.
    lightbox: Lightbox,
    clicks: ClickClassifier,
    theme_mode: ThemeMode,
    /// Path driving navbar highlighting and gallery filtering.
    current_path: String,
    menu_open: bool,
    thumbnail_height: f32,
    show_position_counter: bool,
    sort_order: SortOrder,
    /// Localized message shown when the last document load failed.
    load_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("galleries", &self.galleries.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Ensures thumbnail heights stay inside the supported range so persisted
/// configs cannot request nonsensical sizes.
fn clamp_thumbnail_height(value: f32) -> f32 {
    value.clamp(config::MIN_THUMBNAIL_HEIGHT, config::MAX_THUMBNAIL_HEIGHT)
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            document_title: None,
            galleries: Vec::new(),
            lightbox: Lightbox::new(),
            clicks: ClickClassifier::new(DoubleClickWindow::default()),
            theme_mode: ThemeMode::System,
            current_path: navbar::ROOT_PATH.to_string(),
            menu_open: false,
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
            show_position_counter: config::DEFAULT_SHOW_POSITION_COUNTER,
            sort_order: SortOrder::default(),
            load_error: None,
        }
    }
}

impl App {
    /// Initializes application state and loads the document named on the
    /// command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.sort_order = config.gallery.sort_order.unwrap_or_default();
        app.thumbnail_height = clamp_thumbnail_height(
            config
                .gallery
                .thumbnail_height
                .unwrap_or(config::DEFAULT_THUMBNAIL_HEIGHT),
        );
        app.clicks = ClickClassifier::new(DoubleClickWindow::new(
            config
                .gallery
                .double_click_window_ms
                .unwrap_or(config::DEFAULT_DOUBLE_CLICK_WINDOW_MS),
        ));
        app.show_position_counter = config
            .lightbox
            .show_position_counter
            .unwrap_or(config::DEFAULT_SHOW_POSITION_COUNTER);

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "configuration problem, using defaults");
        }

        if let Some(path_str) = flags.path {
            let path = PathBuf::from(&path_str);
            let loaded = if path.is_dir() {
                scanner::scan_directory(&path, app.sort_order)
            } else {
                Document::from_manifest_path(&path)
            };

            match loaded {
                Ok(document) => app.install_document(document),
                Err(err) => app.report_load_error(&err),
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.document_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }

    /// Replaces the current document: rebinds every gallery and resets
    /// navigation and overlay state.
    fn install_document(&mut self, document: Document) {
        tracing::info!(
            galleries = document.galleries.len(),
            images = document.image_count(),
            "gallery document loaded"
        );

        self.document_title = document.title.clone();
        self.galleries = gallery::bind(&document);
        self.lightbox.close();
        self.current_path = navbar::ROOT_PATH.to_string();
        self.load_error = None;
    }

    fn report_load_error(&mut self, error: &Error) {
        tracing::warn!(error = %error, "failed to load gallery document");
        let reason = error.to_string();
        self.load_error = Some(
            self.i18n
                .tr_with_args("error-document-load-failed", &[("reason", reason.as_str())]),
        );
    }

    /// Navbar entries: Home plus one link per gallery that carries a path.
    fn nav_links(&self) -> Vec<NavLink> {
        let mut links = vec![NavLink {
            label: self.i18n.tr("navbar-home"),
            href: navbar::ROOT_PATH.to_string(),
        }];

        for gallery in &self.galleries {
            if let Some(path) = gallery.nav_path() {
                let label = gallery
                    .title()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.i18n.tr("gallery-untitled"));
                links.push(NavLink {
                    label,
                    href: path.to_string(),
                });
            }
        }

        links
    }

    /// Galleries shown for the current navigation path: all of them on the
    /// home path, otherwise those whose path the active-link contract
    /// matches.
    fn visible_galleries(&self) -> Vec<(usize, &BoundGallery)> {
        self.galleries
            .iter()
            .enumerate()
            .filter(|(_, gallery)| {
                if self.current_path == navbar::ROOT_PATH {
                    return true;
                }
                gallery
                    .nav_path()
                    .is_some_and(|path| navbar::is_active_link(&self.current_path, path))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{gallery_panel, lightbox_overlay};
    use iced::keyboard::{key::Named, Key};

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

[[gallery]]
title = "Stage"
nav-path = "/stage"

[gallery.main-photo]
src = "solo.jpg"
alt = "Solo"

[[gallery.thumbnail]]
src = "solo.jpg"
alt = "Solo"
"#;

    fn app_with_document() -> App {
        let mut app = App::default();
        let document = Document::from_manifest_str(MANIFEST).expect("manifest parse failed");
        app.install_document(document);
        app
    }

    fn press_thumbnail(app: &mut App, gallery: usize, thumbnail: usize) {
        let _ = app.update(Message::Gallery {
            index: gallery,
            message: gallery_panel::Message::ThumbnailPressed(thumbnail),
        });
    }

    #[test]
    fn default_app_starts_empty_and_closed() {
        let app = App::default();
        assert!(app.galleries.is_empty());
        assert!(!app.lightbox.is_open());
        assert_eq!(app.current_path, navbar::ROOT_PATH);
    }

    #[test]
    fn title_includes_document_title_when_present() {
        let app = App::default();
        let bare_title = app.title();
        assert!(!bare_title.is_empty());

        let app = app_with_document();
        assert!(app.title().starts_with("Portfolio"));
    }

    #[test]
    fn single_click_selects_without_opening() {
        let mut app = app_with_document();

        press_thumbnail(&mut app, 0, 1);

        let gallery = &app.galleries[0];
        assert_eq!(
            gallery.main_photo().map(|m| m.source().as_str()),
            Some("b.jpg")
        );
        assert_eq!(gallery.active_thumbnail(), Some(1));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn double_click_opens_lightbox_at_thumbnail_index() {
        let mut app = app_with_document();

        press_thumbnail(&mut app, 0, 2);
        press_thumbnail(&mut app, 0, 2);

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), 2);
        assert_eq!(app.lightbox.image_count(), 3);
        assert!(app.lightbox.controls_visible());
        assert_eq!(
            app.lightbox.displayed_image().map(|s| s.as_str()),
            Some("c.jpg")
        );
    }

    #[test]
    fn clicks_in_different_galleries_do_not_pair_into_a_double() {
        let mut app = app_with_document();

        press_thumbnail(&mut app, 0, 0);
        press_thumbnail(&mut app, 1, 0);

        assert!(!app.lightbox.is_open());
        // Both galleries saw a selection, isolated from each other.
        assert_eq!(app.galleries[0].active_thumbnail(), Some(0));
        assert_eq!(app.galleries[1].active_thumbnail(), Some(0));
    }

    #[test]
    fn main_photo_press_opens_at_its_position() {
        let mut app = app_with_document();

        press_thumbnail(&mut app, 0, 1);
        let _ = app.update(Message::Gallery {
            index: 0,
            message: gallery_panel::Message::MainPhotoPressed,
        });

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), 1);
    }

    #[test]
    fn escape_while_closed_changes_nothing() {
        let mut app = app_with_document();
        press_thumbnail(&mut app, 0, 1);

        let galleries_before = app.galleries.clone();
        let lightbox_before = app.lightbox.clone();

        let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));

        assert_eq!(app.galleries, galleries_before);
        assert_eq!(app.lightbox, lightbox_before);
    }

    #[test]
    fn escape_closes_the_open_lightbox() {
        let mut app = app_with_document();
        press_thumbnail(&mut app, 0, 0);
        press_thumbnail(&mut app, 0, 0);
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn arrow_keys_navigate_with_wraparound() {
        let mut app = app_with_document();
        press_thumbnail(&mut app, 0, 2);
        press_thumbnail(&mut app, 0, 2);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.lightbox.current_index(), 0);

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowLeft)));
        assert_eq!(app.lightbox.current_index(), 2);
    }

    #[test]
    fn arrow_right_in_single_image_gallery_is_inert() {
        let mut app = app_with_document();

        press_thumbnail(&mut app, 1, 0);
        press_thumbnail(&mut app, 1, 0);

        assert!(app.lightbox.is_open());
        assert!(!app.lightbox.controls_visible());

        let _ = app.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(app.lightbox.current_index(), 0);
        assert_eq!(
            app.lightbox.displayed_image().map(|s| s.as_str()),
            Some("solo.jpg")
        );
    }

    #[test]
    fn backdrop_press_closes_the_lightbox() {
        let mut app = app_with_document();
        press_thumbnail(&mut app, 0, 0);
        press_thumbnail(&mut app, 0, 0);

        let _ = app.update(Message::Lightbox(lightbox_overlay::Message::BackdropPressed));
        assert!(!app.lightbox.is_open());

        // Closing an already-closed lightbox is a no-op.
        let _ = app.update(Message::Lightbox(lightbox_overlay::Message::ClosePressed));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn nav_link_filters_visible_galleries() {
        let mut app = app_with_document();
        assert_eq!(app.visible_galleries().len(), 2);

        let _ = app.update(Message::Navbar(navbar::Message::GoTo("/stage".to_string())));

        let visible = app.visible_galleries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.title(), Some("Stage"));

        let _ = app.update(Message::Navbar(navbar::Message::GoTo(
            navbar::ROOT_PATH.to_string(),
        )));
        assert_eq!(app.visible_galleries().len(), 2);
    }

    #[test]
    fn nav_links_cover_home_and_galleries() {
        let app = app_with_document();
        let links = app.nav_links();

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].href, navbar::ROOT_PATH);
        assert_eq!(links[1].href, "/venue");
        assert_eq!(links[2].href, "/stage");
    }

    #[test]
    fn install_document_resets_overlay_and_path() {
        let mut app = app_with_document();
        press_thumbnail(&mut app, 0, 0);
        press_thumbnail(&mut app, 0, 0);
        app.current_path = "/venue".to_string();

        let replacement =
            Document::from_manifest_str("title = \"Next\"\n").expect("manifest parse failed");
        app.install_document(replacement);

        assert!(!app.lightbox.is_open());
        assert_eq!(app.current_path, navbar::ROOT_PATH);
        assert!(app.galleries.is_empty());
        assert_eq!(app.document_title.as_deref(), Some("Next"));
    }

    #[test]
    fn report_load_error_keeps_previous_document() {
        let mut app = app_with_document();
        app.report_load_error(&Error::Document("broken".to_string()));

        assert!(app.load_error.is_some());
        assert_eq!(app.galleries.len(), 2);
    }

    #[test]
    fn thumbnail_height_is_clamped() {
        assert_eq!(
            clamp_thumbnail_height(0.0),
            config::MIN_THUMBNAIL_HEIGHT
        );
        assert_eq!(
            clamp_thumbnail_height(10_000.0),
            config::MAX_THUMBNAIL_HEIGHT
        );
    }
}
