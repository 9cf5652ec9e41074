// SPDX-License-Identifier: MPL-2.0
//! Gallery panel: the main photo above its thumbnail strip.
//!
//! Presses are reported as-is; the application routes thumbnail presses
//! through the click classifier, so this component stays free of timing
//! logic.

use crate::gallery::BoundGallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, Column, Container, Row, Scrollable, Text};
use iced::{mouse, ContentFit, Element, Length};

/// Height of the main-photo area, in logical pixels.
const MAIN_PHOTO_HEIGHT: f32 = 420.0;

/// Contextual data needed to render one gallery panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnail_height: f32,
}

/// Messages emitted by a gallery panel. The parent wraps them with the
/// gallery's index.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    MainPhotoPressed,
    ThumbnailPressed(usize),
}

/// Render one gallery: title, main photo, thumbnail strip.
pub fn view<'a>(gallery: &'a BoundGallery, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::SM).width(Length::Fill);

    if let Some(title) = gallery.title() {
        content = content.push(Text::new(title).size(typography::TITLE_MD));
    }

    if let Some(main) = gallery.main_photo() {
        let photo = Image::new(Handle::from_path(main.source().as_str()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(MAIN_PHOTO_HEIGHT));

        // The main photo is always rendered clickable, even when the
        // gallery has no thumbnails to navigate.
        let clickable = mouse_area(photo)
            .interaction(mouse::Interaction::Pointer)
            .on_press(Message::MainPhotoPressed);
        content = content.push(clickable);

        if !main.alt().is_empty() {
            content = content.push(Text::new(main.alt()).size(typography::CAPTION));
        }
    }

    if gallery.thumbnails().is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("gallery-no-thumbnails")).size(typography::CAPTION),
        );
    } else {
        content = content.push(build_thumbnail_strip(gallery, ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn build_thumbnail_strip<'a>(
    gallery: &'a BoundGallery,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::XS);

    for (index, thumbnail) in gallery.thumbnails().iter().enumerate() {
        let image = Image::new(Handle::from_path(thumbnail.src.as_str()))
            .content_fit(ContentFit::Contain)
            .height(Length::Fixed(ctx.thumbnail_height));

        let active = gallery.active_thumbnail() == Some(index);
        let framed = Container::new(image)
            .padding(spacing::XXS)
            .style(styles::container::thumbnail(active));

        strip = strip.push(
            mouse_area(framed)
                .interaction(mouse::Interaction::Pointer)
                .on_press(Message::ThumbnailPressed(index)),
        );
    }

    Scrollable::new(strip)
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}
