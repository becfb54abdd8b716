// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The visible screen sits in a scrollable page wrapped by the scroll lock.
//! An open lightbox and any load notices are stacked on top of it.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::gallery::{self, GalleryController, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::design_tokens::spacing;
use crate::ui::freelance;
use crate::ui::home;
use crate::ui::lightbox;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notice::Notices;
use crate::ui::projects;
use crate::ui::widgets::scroll_locked;
use iced::alignment::Horizontal;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub asset_base: &'a str,
    pub home: &'a home::State,
    pub projects: &'a projects::State,
    pub freelance: &'a freelance::State,
    pub notices: &'a Notices,
    pub scroll_lock: &'a ScrollLock,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => ctx
            .home
            .view(ctx.catalog, ctx.asset_base, ctx.i18n)
            .map(Message::Home),
        Screen::Projects => ctx
            .projects
            .view(ctx.catalog, ctx.asset_base, ctx.i18n)
            .map(Message::Projects),
        Screen::About => about::view(ctx.catalog, ctx.i18n).map(Message::About),
        Screen::Freelance => ctx
            .freelance
            .view(ctx.catalog, ctx.i18n)
            .map(Message::Freelance),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let body = Container::new(page)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);
    let scrolling_page = scroll_locked(
        scrollable(body).width(Length::Fill).height(Length::Fill),
        ctx.scroll_lock.clone(),
    );

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar_view)
            .push(scrolling_page),
    );

    if let Some(overlay) = view_lightbox(&ctx) {
        layers = layers.push(overlay);
    }

    if !ctx.notices.is_empty() {
        layers = layers.push(ctx.notices.view(ctx.i18n).map(Message::Notice));
    }

    layers.into()
}

fn view_lightbox<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let (gallery, wrap): (&GalleryController, fn(gallery::Message) -> Message) =
        match ctx.screen {
            Screen::Home => (ctx.home.gallery(), |msg| {
                Message::Home(home::Message::Gallery(msg))
            }),
            Screen::Projects => (ctx.projects.gallery(), |msg| {
                Message::Projects(projects::Message::Gallery(msg))
            }),
            Screen::About | Screen::Freelance => return None,
        };

    let title = gallery
        .active_collection_key()
        .and_then(|key| ctx.catalog.project(key))
        .map(|project| project.name.as_str());

    lightbox::view(lightbox::ViewContext {
        i18n: ctx.i18n,
        gallery,
        title,
    })
    .map(|element| element.map(wrap))
}
