// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the full-screen modal layer stacked over the page.
//!
//! Layering, bottom to top: the dark backdrop (press closes), the displayed
//! image (opaque, so presses on it do not fall through to the backdrop),
//! then the close/previous/next controls and the position counter. The
//! previous/next controls are only rendered when the image list holds more
//! than one entry.

use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::tooltip::Position;
use iced::widget::{button, mouse_area, opaque, tooltip, Container, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Widest the content area gets; presses outside it hit the backdrop.
const CONTENT_MAX_WIDTH: f32 = 1100.0;

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub show_position_counter: bool,
}

/// Messages emitted by the overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ClosePressed,
    BackdropPressed,
    PreviousPressed,
    NextPressed,
}

/// Render the overlay. Callers only invoke this while the lightbox is open.
pub fn view<'a>(lightbox: &'a Lightbox, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut stack = Stack::new().push(backdrop);

    if let Some(source) = lightbox.displayed_image() {
        let image = Image::new(Handle::from_path(source.as_str()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);

        // Opaque so a press on the content area does not reach the backdrop
        // underneath; presses on the margins around it still close.
        let content = Container::new(opaque(image))
            .width(Length::Fill)
            .height(Length::Fill)
            .max_width(CONTENT_MAX_WIDTH);

        stack = stack.push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    let close = control("✕", ctx.i18n.tr("lightbox-close"), Message::ClosePressed);
    stack = stack.push(
        Container::new(close)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    if lightbox.controls_visible() {
        let previous = control(
            "◀",
            ctx.i18n.tr("lightbox-previous"),
            Message::PreviousPressed,
        );
        stack = stack.push(
            Container::new(previous)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        );

        let next = control("▶", ctx.i18n.tr("lightbox-next"), Message::NextPressed);
        stack = stack.push(
            Container::new(next)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    if ctx.show_position_counter && lightbox.image_count() > 1 {
        let position = format!(
            "{}/{}",
            lightbox.current_index() + 1,
            lightbox.image_count()
        );
        let counter = Container::new(Text::new(position).size(typography::BODY))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::LG));

        stack = stack.push(
            Container::new(counter)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

/// One round overlay control with its tooltip.
fn control<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let control_button = button(
        Container::new(Text::new(glyph).size(typography::TITLE_SM))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_CONTROL,
        opacity::OVERLAY_MEDIUM,
    ))
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .padding(0.0);

    tooltip(
        control_button,
        Text::new(label).size(typography::CAPTION),
        Position::Bottom,
    )
    .style(styles::overlay::indicator(radius::SM))
    .into()
}
