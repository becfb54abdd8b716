// SPDX-License-Identifier: MPL-2.0
//! Projects screen: filterable, paginated project grid with its own lightbox.

use crate::catalog::{Catalog, Paginator, ProjectFilter, ProjectKind};
use crate::gallery::{self, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::project_card;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text, Column, Row};
use iced::Element;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    KindSelected(Option<ProjectKind>),
    IndustrySelected(Option<String>),
    NextPage,
    PreviousPage,
    Card(project_card::Message),
    Gallery(gallery::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    CopyLink(String),
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
    filter: ProjectFilter,
    paginator: Paginator,
    gallery: GalleryController,
}

impl State {
    pub fn new(per_page: usize, gallery: GalleryController) -> Self {
        Self {
            filter: ProjectFilter::default(),
            paginator: Paginator::new(per_page),
            gallery,
        }
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryController {
        &mut self.gallery
    }

    pub fn handle(&mut self, message: Message, catalog: &Catalog) -> Effect {
        match message {
            Message::KindSelected(kind) => {
                self.filter.kind = kind;
                self.paginator.reset();
            }
            Message::IndustrySelected(industry) => {
                self.filter.industry = industry;
                self.paginator.reset();
            }
            Message::NextPage => {
                let total = self.filter.apply(&catalog.projects).count();
                self.paginator.next(total);
            }
            Message::PreviousPage => {
                let total = self.filter.apply(&catalog.projects).count();
                self.paginator.previous(total);
            }
            Message::Card(project_card::Message::OpenGallery(key)) => {
                return self.gallery.handle(gallery::Message::Open(key)).into();
            }
            Message::Card(project_card::Message::CopyLink(url)) => return Effect::CopyLink(url),
            Message::Gallery(msg) => return self.gallery.handle(msg).into(),
        }
        Effect::None
    }

    pub fn view<'a>(
        &'a self,
        catalog: &'a Catalog,
        asset_base: &str,
        i18n: &I18n,
    ) -> Element<'a, Message> {
        let matching: Vec<_> = self.filter.apply(&catalog.projects).collect();
        let total = matching.len();

        let mut content = Column::new()
            .spacing(spacing::LG)
            .push(text(i18n.tr("projects-title")).size(typography::TITLE_LG))
            .push(self.kind_filters(i18n))
            .push(self.industry_filters(catalog, i18n));

        if matching.is_empty() {
            content = content.push(text(i18n.tr("projects-empty")));
        } else {
            let cards = matching[self.paginator.range(total)]
                .iter()
                .map(|&project| project_card::view(project, asset_base, i18n).map(Message::Card))
                .collect();
            content = content.push(project_card::grid(cards));
        }

        content.push(self.pagination(total, i18n)).into()
    }

    fn kind_filters<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let selected = self.filter.kind;
        let all = chip(i18n.tr("filter-kind-all"), selected.is_none(), Message::KindSelected(None));

        ProjectKind::ALL
            .iter()
            .fold(labelled_row(i18n.tr("filter-kind-label")).push(all), |row, kind| {
                row.push(chip(
                    i18n.tr(kind.i18n_key()),
                    selected == Some(*kind),
                    Message::KindSelected(Some(*kind)),
                ))
            })
            .into()
    }

    fn industry_filters<'a>(&self, catalog: &Catalog, i18n: &I18n) -> Element<'a, Message> {
        let selected = self.filter.industry.as_deref();
        let all = chip(
            i18n.tr("filter-industry-all"),
            selected.is_none(),
            Message::IndustrySelected(None),
        );

        catalog
            .industries()
            .into_iter()
            .fold(
                labelled_row(i18n.tr("filter-industry-label")).push(all),
                |row, industry| {
                    row.push(chip(
                        industry.to_string(),
                        selected == Some(industry),
                        Message::IndustrySelected(Some(industry.to_string())),
                    ))
                },
            )
            .wrap()
            .into()
    }

    fn pagination<'a>(&self, total: usize, i18n: &I18n) -> Element<'a, Message> {
        let page = self.paginator.page();
        let count = self.paginator.page_count(total);
        let status = i18n.tr_with_args(
            "pagination-status",
            &[
                ("page", page.to_string().as_str()),
                ("count", count.to_string().as_str()),
            ],
        );

        let previous = button(text(i18n.tr("pagination-previous")))
            .on_press_maybe((page > 1).then_some(Message::PreviousPage))
            .style(styles::button::tab(false));
        let next = button(text(i18n.tr("pagination-next")))
            .on_press_maybe((page < count).then_some(Message::NextPage))
            .style(styles::button::tab(false));

        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(previous)
            .push(text(status).size(typography::BODY))
            .push(next)
            .into()
    }
}

fn labelled_row<'a>(label: String) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(label).size(typography::BODY))
}

fn chip<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(message)
        .style(styles::button::tab(selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ScrollLock;
    use std::sync::Arc;
    use std::time::Duration;

    fn state(catalog: &Catalog, per_page: usize) -> (State, ScrollLock) {
        let lock = ScrollLock::new();
        let gallery = GalleryController::new(
            Arc::new(catalog.gallery_collections("/")),
            Duration::from_millis(3000),
            lock.clone(),
        );
        (State::new(per_page, gallery), lock)
    }

    #[test]
    fn changing_filter_resets_page() {
        let catalog = Catalog::embedded().expect("embedded");
        let (mut state, _lock) = state(&catalog, 2);
        state.handle(Message::NextPage, &catalog);
        assert_eq!(state.paginator().page(), 2);

        state.handle(Message::KindSelected(Some(ProjectKind::Web)), &catalog);
        assert_eq!(state.paginator().page(), 1);
        assert_eq!(state.filter().kind, Some(ProjectKind::Web));
    }

    #[test]
    fn paging_stops_at_last_page() {
        let catalog = Catalog::embedded().expect("embedded");
        let (mut state, _lock) = state(&catalog, 6);
        for _ in 0..5 {
            state.handle(Message::NextPage, &catalog);
        }
        assert_eq!(state.paginator().page(), 2);
    }

    #[test]
    fn card_opens_gallery_and_escape_closes_it() {
        let catalog = Catalog::embedded().expect("embedded");
        let (mut state, lock) = state(&catalog, 6);

        let opened = state.handle(
            Message::Card(project_card::Message::OpenGallery("carhub".into())),
            &catalog,
        );
        assert_eq!(
            opened,
            Effect::Gallery(gallery::Effect::Opened {
                key: "carhub".into()
            })
        );
        assert_eq!(state.gallery().active_collection_key(), Some("carhub"));
        assert!(lock.is_locked());

        let closed = state.handle(Message::Gallery(gallery::Message::Close), &catalog);
        assert_eq!(closed, Effect::Gallery(gallery::Effect::Closed));
        assert!(!state.gallery().is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn link_click_is_propagated() {
        let catalog = Catalog::embedded().expect("embedded");
        let (mut state, _lock) = state(&catalog, 6);
        let effect = state.handle(
            Message::Card(project_card::Message::CopyLink("https://example.com".into())),
            &catalog,
        );
        assert_eq!(effect, Effect::CopyLink("https://example.com".into()));
    }

    #[test]
    fn view_renders_empty_and_full() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded");
        let (mut state, _lock) = state(&catalog, 6);
        {
            let _full = state.view(&catalog, "/", &i18n);
        }

        state.handle(Message::IndustrySelected(Some("Nowhere".into())), &catalog);
        assert_eq!(state.paginator().page(), 1);
        let _empty = state.view(&catalog, "/", &i18n);
    }
}
