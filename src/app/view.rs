// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the navbar plus a scrollable column of gallery panels,
//! filtered by the active navigation path. While the lightbox is open, the
//! modal overlay is stacked on top as an opaque layer: every event
//! underneath is captured, which also suppresses page scrolling.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{gallery_panel, lightbox_overlay, navbar, styles};
use iced::widget::{opaque, Column, Container, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Renders the application view.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        links: app.nav_links(),
        current_path: &app.current_path,
        menu_open: app.menu_open,
    })
    .map(Message::Navbar);

    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill);

    if let Some(error) = &app.load_error {
        page = page.push(
            Container::new(Text::new(error.as_str()).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::error_banner),
        );
    }

    if app.galleries.is_empty() {
        page = page.push(build_empty_state(app));
    } else {
        let panel_ctx = gallery_panel::ViewContext {
            i18n: &app.i18n,
            thumbnail_height: app.thumbnail_height,
        };

        for (index, gallery) in app.visible_galleries() {
            page = page.push(
                gallery_panel::view(gallery, &panel_ctx)
                    .map(move |message| Message::Gallery { index, message }),
            );
        }
    }

    let base = Container::new(
        Column::new().push(navbar_view).push(
            Scrollable::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    if app.lightbox.is_open() {
        let overlay = lightbox_overlay::view(
            &app.lightbox,
            &lightbox_overlay::ViewContext {
                i18n: &app.i18n,
                show_position_counter: app.show_position_counter,
            },
        )
        .map(Message::Lightbox);

        Stack::new().push(base).push(opaque(overlay)).into()
    } else {
        base.into()
    }
}

fn build_empty_state(app: &App) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(app.i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
            .push(Text::new(app.i18n.tr("gallery-empty-hint")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .into()
}
