// SPDX-License-Identifier: MPL-2.0
//! Project card shared by the home and projects screens.

use crate::catalog::{resolve_asset_path, Project};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, image, text, Column, Container, Row, Stack};
use iced::{ContentFit, Element, Length};

/// Messages emitted by a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the lightbox on this gallery key.
    OpenGallery(String),
    /// Copy an outbound link to the clipboard.
    CopyLink(String),
}

pub fn view<'a>(project: &'a Project, asset_base: &str, i18n: &I18n) -> Element<'a, Message> {
    let cover_path = resolve_asset_path(asset_base, &project.cover);
    let placeholder = Container::new(text(project.initials()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::cover_placeholder);
    let cover = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COVER_HEIGHT))
        .push(placeholder)
        .push(
            image(image::Handle::from_path(cover_path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let tags = Row::new()
        .spacing(spacing::XS)
        .push(tag(i18n.tr(project.kind.i18n_key())))
        .push(tag(project.industry.clone()));

    let mut actions = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if project.has_gallery() {
        let count = project.images.len().to_string();
        actions = actions
            .push(
                button(text(i18n.tr("project-view-gallery")).size(typography::BODY))
                    .on_press(Message::OpenGallery(project.slug.clone()))
                    .style(styles::button::primary),
            )
            .push(
                text(i18n.tr_with_args("project-image-count", &[("count", count.as_str())]))
                    .size(typography::CAPTION),
            );
    }

    let links = project.links.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, (label_key, url)| {
            row.push(
                button(text(i18n.tr(label_key)).size(typography::CAPTION))
                    .on_press(Message::CopyLink(url.to_string()))
                    .style(styles::button::link),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(text(project.name.as_str()).size(typography::TITLE_MD))
        .push(tags)
        .push(text(project.description.as_str()).size(typography::BODY))
        .push(actions)
        .push(links);

    Container::new(Column::new().push(cover).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn tag<'a>(label: String) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tag)
        .into()
}

/// Lays cards out in rows of [`sizing::CARDS_PER_ROW`].
pub fn grid<'a, M: 'a>(cards: Vec<Element<'a, M>>) -> Element<'a, M> {
    let mut rows = Column::new().spacing(spacing::LG);
    let mut cards = cards.into_iter().peekable();
    while cards.peek().is_some() {
        let row = cards
            .by_ref()
            .take(sizing::CARDS_PER_ROW)
            .fold(Row::new().spacing(spacing::LG), |row, card| row.push(card));
        rows = rows.push(row);
    }
    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_embedded_project_renders() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded catalog");
        let cards: Vec<Element<'_, Message>> = catalog
            .projects
            .iter()
            .map(|project| view(project, "/", &i18n))
            .collect();
        let _grid = grid(cards);
    }
}
