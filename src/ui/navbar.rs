// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows one link per gallery (plus Home) and a hamburger menu with
//! the document-open actions. Link highlighting follows the page contract:
//! a link is active when the current path equals its href exactly, or, for
//! non-root hrefs, when the current path starts with the href.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// The href every document starts on; shows all galleries.
pub const ROOT_PATH: &str = "/";

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub links: Vec<NavLink>,
    pub current_path: &'a str,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    OpenFolder,
    OpenManifest,
    GoTo(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFolder,
    OpenManifest,
    NavigateTo(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenFolder => {
            *menu_open = false;
            Event::OpenFolder
        }
        Message::OpenManifest => {
            *menu_open = false;
            Event::OpenManifest
        }
        Message::GoTo(path) => {
            *menu_open = false;
            Event::NavigateTo(path)
        }
    }
}

/// The active-link contract: exact match, or prefix match for non-root
/// hrefs (so `/venue/stage` keeps the `/venue` link active while `/` only
/// matches itself).
#[must_use]
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    current_path == href || (href != ROOT_PATH && current_path.starts_with(href))
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("☰").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .style(styles::button::menu_item)
        .padding(spacing::XS);

    let mut links = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for link in ctx.links.clone() {
        let active = is_active_link(ctx.current_path, &link.href);
        links = links.push(
            button(Text::new(link.label).size(typography::BODY))
                .on_press(Message::GoTo(link.href))
                .style(styles::button::nav_link(active))
                .padding(spacing::XS),
        );
    }

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(links);

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_folder = button(Text::new(ctx.i18n.tr("menu-open-folder")).size(typography::BODY))
        .on_press(Message::OpenFolder)
        .style(styles::button::menu_item)
        .width(Length::Fill)
        .padding(spacing::XS);

    let open_manifest =
        button(Text::new(ctx.i18n.tr("menu-open-manifest")).size(typography::BODY))
            .on_press(Message::OpenManifest)
            .style(styles::button::menu_item)
            .width(Length::Fill)
            .padding(spacing::XS);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(open_folder)
            .push(open_manifest),
    )
    .width(Length::Fixed(240.0))
    .padding(spacing::XS)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_matches() {
        assert!(is_active_link("/venue", "/venue"));
        assert!(is_active_link("/", "/"));
    }

    #[test]
    fn non_root_prefix_matches() {
        assert!(is_active_link("/venue/stage", "/venue"));
        // Plain prefix semantics, as specified: sibling paths sharing the
        // prefix match too.
        assert!(is_active_link("/venue-2", "/venue"));
    }

    #[test]
    fn root_href_only_matches_exactly() {
        assert!(!is_active_link("/venue", "/"));
        assert!(!is_active_link("/anything", "/"));
    }

    #[test]
    fn unrelated_paths_do_not_match() {
        assert!(!is_active_link("/stage", "/venue"));
        assert!(!is_active_link("/", "/venue"));
    }

    #[test]
    fn toggle_menu_flips_state_without_event() {
        let mut menu_open = false;

        assert!(matches!(update(Message::ToggleMenu, &mut menu_open), Event::None));
        assert!(menu_open);

        assert!(matches!(update(Message::ToggleMenu, &mut menu_open), Event::None));
        assert!(!menu_open);
    }

    #[test]
    fn menu_actions_close_the_menu() {
        let mut menu_open = true;
        assert!(matches!(
            update(Message::OpenFolder, &mut menu_open),
            Event::OpenFolder
        ));
        assert!(!menu_open);

        menu_open = true;
        assert!(matches!(
            update(Message::OpenManifest, &mut menu_open),
            Event::OpenManifest
        ));
        assert!(!menu_open);
    }

    #[test]
    fn go_to_propagates_the_path() {
        let mut menu_open = true;
        let event = update(Message::GoTo("/venue".to_string()), &mut menu_open);
        assert!(matches!(event, Event::NavigateTo(path) if path == "/venue"));
        assert!(!menu_open);
    }
}
