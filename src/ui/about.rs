// SPDX-License-Identifier: MPL-2.0
//! About screen: the designer's biography, experience and skills.

use crate::catalog::{Catalog, Experience, Profile, SkillGroup};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::project_card;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Copy a profile link to the clipboard.
    CopyLink(String),
}

pub fn view<'a>(catalog: &'a Catalog, i18n: &I18n) -> Element<'a, Message> {
    let profile = &catalog.profile;
    if profile.is_empty() {
        return text(i18n.tr("about-empty")).into();
    }

    let mut page = Column::new()
        .spacing(spacing::XL)
        .push(biography(profile, i18n));

    if !catalog.experience.is_empty() {
        let cards = catalog.experience.iter().map(experience_card).collect();
        page = page.push(
            Column::new()
                .spacing(spacing::MD)
                .push(text(i18n.tr("about-experience")).size(typography::TITLE_MD))
                .push(project_card::grid(cards)),
        );
    }

    if !catalog.skills.is_empty() {
        page = page.push(
            Column::new()
                .spacing(spacing::MD)
                .push(text(i18n.tr("about-skills")).size(typography::TITLE_MD))
                .push(skills(&catalog.skills)),
        );
    }

    page.into()
}

fn biography<'a>(profile: &'a Profile, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(profile.name.as_str()).size(typography::TITLE_LG))
        .push(text(profile.headline.as_str()).size(typography::TITLE_SM))
        .push(text(profile.bio.as_str()).size(typography::BODY_LG));

    if let Some(location) = profile.location.as_deref() {
        column = column.push(
            text(i18n.tr_with_args("about-location", &[("location", location)]))
                .size(typography::BODY),
        );
    }
    if let Some(education) = profile.education.as_deref() {
        column = column.push(
            text(i18n.tr_with_args("about-education", &[("education", education)]))
                .size(typography::BODY),
        );
    }

    if !profile.links.is_empty() {
        let links = profile.links.iter().fold(
            Row::new().spacing(spacing::XS).push(text(i18n.tr("about-connect")).size(typography::BODY)),
            |row, link| {
                row.push(
                    button(text(link.label.as_str()).size(typography::BODY))
                        .on_press(Message::CopyLink(link.url.clone()))
                        .style(styles::button::link),
                )
            },
        );
        column = column.push(links);
    }

    Container::new(column)
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .into()
}

fn experience_card(experience: &Experience) -> Element<'_, Message> {
    let highlights = experience.highlights.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, line| column.push(text(format!("• {line}")).size(typography::BODY)),
    );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(text(experience.title.as_str()).size(typography::TITLE_SM))
            .push(text(experience.organization.as_str()).size(typography::BODY))
            .push(text(experience.period.as_str()).size(typography::CAPTION))
            .push(highlights),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn skills(groups: &[SkillGroup]) -> Element<'_, Message> {
    groups
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, group| {
            let tags = group.items.iter().fold(
                Row::new().spacing(spacing::XS),
                |row, item| {
                    row.push(
                        Container::new(text(item.as_str()).size(typography::CAPTION))
                            .padding([spacing::XXS, spacing::XS])
                            .style(styles::container::tag),
                    )
                },
            );
            column.push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(text(group.group.as_str()).size(typography::BODY_LG))
                    .push(tags.wrap()),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_embedded_profile() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded");
        let _element = view(&catalog, &i18n);
    }

    #[test]
    fn renders_placeholder_without_profile() {
        let i18n = I18n::default();
        let catalog = Catalog::default();
        let _element = view(&catalog, &i18n);
    }
}
