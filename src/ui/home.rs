// SPDX-License-Identifier: MPL-2.0
//! Home screen: featured projects with their own lightbox.

use crate::catalog::Catalog;
use crate::gallery::{self, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::project_card;
use crate::ui::styles;
use iced::widget::{button, text, Column};
use iced::Element;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Card(project_card::Message),
    Gallery(gallery::Message),
    ShowAllProjects,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    CopyLink(String),
    ShowAllProjects,
    Gallery(gallery::Effect),
}

impl From<gallery::Effect> for Effect {
    fn from(effect: gallery::Effect) -> Self {
        match effect {
            gallery::Effect::None => Effect::None,
            other => Effect::Gallery(other),
        }
    }
}

#[derive(Debug)]
pub struct State {
    gallery: GalleryController,
}

impl State {
    pub fn new(gallery: GalleryController) -> Self {
        Self { gallery }
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryController {
        &mut self.gallery
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Card(project_card::Message::OpenGallery(key)) => {
                self.gallery.handle(gallery::Message::Open(key)).into()
            }
            Message::Card(project_card::Message::CopyLink(url)) => Effect::CopyLink(url),
            Message::Gallery(msg) => self.gallery.handle(msg).into(),
            Message::ShowAllProjects => {
                self.gallery.close();
                Effect::ShowAllProjects
            }
        }
    }

    pub fn view<'a>(&self, catalog: &'a Catalog, asset_base: &str, i18n: &I18n) -> Element<'a, Message> {
        let cards = catalog
            .featured()
            .map(|project| project_card::view(project, asset_base, i18n).map(Message::Card))
            .collect();

        Column::new()
            .spacing(spacing::LG)
            .push(text(i18n.tr("home-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("home-subtitle")).size(typography::BODY_LG))
            .push(project_card::grid(cards))
            .push(
                button(text(i18n.tr("home-all-projects")))
                    .on_press(Message::ShowAllProjects)
                    .style(styles::button::primary),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ScrollLock;
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> (State, ScrollLock) {
        let catalog = Catalog::embedded().expect("embedded");
        let lock = ScrollLock::new();
        let gallery = GalleryController::new(
            Arc::new(catalog.gallery_collections("/")),
            Duration::from_millis(3000),
            lock.clone(),
        );
        (State::new(gallery), lock)
    }

    #[test]
    fn featured_card_opens_gallery() {
        let (mut state, lock) = state();
        let effect = state.handle(Message::Card(project_card::Message::OpenGallery(
            "swish-strokes".into(),
        )));
        assert_eq!(
            effect,
            Effect::Gallery(gallery::Effect::Opened {
                key: "swish-strokes".into()
            })
        );
        assert!(state.gallery().is_open());
        assert!(state.gallery().is_auto_advancing());
        assert!(lock.is_locked());
    }

    #[test]
    fn leaving_for_projects_closes_gallery() {
        let (mut state, lock) = state();
        state.handle(Message::Card(project_card::Message::OpenGallery(
            "swish-strokes".into(),
        )));
        let effect = state.handle(Message::ShowAllProjects);
        assert_eq!(effect, Effect::ShowAllProjects);
        assert!(!state.gallery().is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn unknown_gallery_reports_nothing() {
        let (mut state, lock) = state();
        let effect = state.handle(Message::Card(project_card::Message::OpenGallery(
            "missing".into(),
        )));
        assert_eq!(effect, Effect::None);
        assert!(!lock.is_locked());
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded");
        let (state, _lock) = state();
        let _element = state.view(&catalog, "/", &i18n);
    }
}
