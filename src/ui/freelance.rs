// SPDX-License-Identifier: MPL-2.0
//! Freelance screen: service packages, the working process, client
//! testimonials and a FAQ where at most one answer is expanded.

use crate::catalog::{Catalog, Faq, Service, WorkflowStep};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::project_card;
use crate::ui::styles;
use crate::ui::testimonials::{self, TestimonialCarousel};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Testimonials(testimonials::Message),
    /// Expand the FAQ entry at this index, or collapse it if already open.
    ToggleFaq(usize),
}

#[derive(Debug)]
pub struct State {
    testimonials: TestimonialCarousel,
    expanded_faq: Option<usize>,
}

impl State {
    pub fn new(testimonials: TestimonialCarousel) -> Self {
        Self {
            testimonials,
            expanded_faq: None,
        }
    }

    pub fn testimonials(&self) -> &TestimonialCarousel {
        &self.testimonials
    }

    pub fn expanded_faq(&self) -> Option<usize> {
        self.expanded_faq
    }

    /// The screen became visible.
    pub fn enter(&mut self, now: Instant) {
        self.testimonials.restart(now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.testimonials.handle(testimonials::Message::Tick(now));
    }

    pub fn needs_ticks(&self) -> bool {
        self.testimonials.needs_ticks()
    }

    pub fn handle(&mut self, message: Message, catalog: &Catalog) {
        match message {
            Message::Testimonials(msg) => self.testimonials.handle(msg),
            Message::ToggleFaq(index) => {
                if index >= catalog.faqs.len() {
                    tracing::debug!(index, len = catalog.faqs.len(), "ignoring faq toggle");
                    return;
                }
                self.expanded_faq = if self.expanded_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
        }
    }

    pub fn view<'a>(&self, catalog: &'a Catalog, i18n: &I18n) -> Element<'a, Message> {
        let mut page = Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("freelance-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("freelance-subtitle")).size(typography::BODY_LG));

        if !catalog.services.is_empty() {
            let cards = catalog.services.iter().map(service_card).collect();
            page = page.push(section(
                i18n.tr("freelance-services"),
                project_card::grid(cards),
            ));
        }

        if !catalog.workflow.is_empty() {
            page = page.push(section(
                i18n.tr("freelance-workflow"),
                workflow(&catalog.workflow),
            ));
        }

        page = page.push(section(
            i18n.tr("freelance-testimonials"),
            self.testimonials
                .view(&catalog.testimonials, i18n)
                .map(Message::Testimonials),
        ));

        if !catalog.faqs.is_empty() {
            page = page.push(section(
                i18n.tr("freelance-faq"),
                faq_list(&catalog.faqs, self.expanded_faq),
            ));
        }

        page.into()
    }
}

fn section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(title).size(typography::TITLE_MD))
        .push(content)
        .into()
}

fn service_card(service: &Service) -> Element<'_, Message> {
    let features = service.features.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, feature| column.push(text(format!("• {feature}")).size(typography::BODY)),
    );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(text(service.title.as_str()).size(typography::TITLE_SM))
            .push(text(service.description.as_str()).size(typography::BODY))
            .push(features),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

/// Steps numbered `01`, `02`, ... in catalog order.
fn workflow(steps: &[WorkflowStep]) -> Element<'_, Message> {
    steps
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::SM), |column, (index, step)| {
            let number = format!("{:02}", index + 1);
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Center)
                    .push(
                        Container::new(text(number).size(typography::TITLE_SM))
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::container::tag),
                    )
                    .push(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(text(step.title.as_str()).size(typography::BODY_LG))
                            .push(text(step.description.as_str()).size(typography::BODY)),
                    ),
            )
        })
        .width(Length::Fixed(sizing::TESTIMONIAL_WIDTH))
        .into()
}

fn faq_list(faqs: &[Faq], expanded: Option<usize>) -> Element<'_, Message> {
    faqs.iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, faq)| {
            let is_open = expanded == Some(index);
            let marker = if is_open { "−" } else { "+" };
            let header = button(
                Row::new()
                    .spacing(spacing::SM)
                    .push(text(faq.question.as_str()).size(typography::BODY_LG).width(Length::Fill))
                    .push(text(marker).size(typography::BODY_LG)),
            )
            .width(Length::Fill)
            .on_press(Message::ToggleFaq(index))
            .style(styles::button::tab(is_open));

            let mut entry = Column::new().spacing(spacing::XS).push(header);
            if is_open {
                entry = entry.push(
                    Container::new(text(faq.answer.as_str()).size(typography::BODY))
                        .padding([spacing::XS, spacing::MD]),
                );
            }
            column.push(entry)
        })
        .width(Length::Fixed(sizing::TESTIMONIAL_WIDTH))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn state(catalog: &Catalog, now: Instant) -> State {
        State::new(TestimonialCarousel::new(
            catalog.testimonials.len(),
            INTERVAL,
            now,
        ))
    }

    #[test]
    fn faq_keeps_one_entry_expanded() {
        let catalog = Catalog::embedded().expect("embedded");
        let mut state = state(&catalog, Instant::now());
        assert_eq!(state.expanded_faq(), None);

        state.handle(Message::ToggleFaq(1), &catalog);
        assert_eq!(state.expanded_faq(), Some(1));

        state.handle(Message::ToggleFaq(3), &catalog);
        assert_eq!(state.expanded_faq(), Some(3));

        state.handle(Message::ToggleFaq(3), &catalog);
        assert_eq!(state.expanded_faq(), None);
    }

    #[test]
    fn faq_toggle_out_of_range_is_ignored() {
        let catalog = Catalog::embedded().expect("embedded");
        let mut state = state(&catalog, Instant::now());
        state.handle(Message::ToggleFaq(2), &catalog);

        state.handle(Message::ToggleFaq(catalog.faqs.len()), &catalog);
        assert_eq!(state.expanded_faq(), Some(2));
    }

    #[test]
    fn entering_restarts_the_testimonial_timer() {
        let catalog = Catalog::embedded().expect("embedded");
        let start = Instant::now();
        let mut state = state(&catalog, start);

        let shown = start + Duration::from_secs(60);
        state.enter(shown);
        state.tick(shown + Duration::from_millis(100));
        assert_eq!(state.testimonials().index(), 0);

        state.tick(shown + INTERVAL);
        assert_eq!(state.testimonials().index(), 1);
        assert!(state.needs_ticks());
    }

    #[test]
    fn testimonial_messages_are_forwarded() {
        let catalog = Catalog::embedded().expect("embedded");
        let mut state = state(&catalog, Instant::now());
        state.handle(Message::Testimonials(testimonials::Message::Next), &catalog);
        assert_eq!(state.testimonials().index(), 1);
        assert!(!state.needs_ticks());
    }

    #[test]
    fn view_renders_full_and_empty_catalogs() {
        let i18n = I18n::default();
        let catalog = Catalog::embedded().expect("embedded");
        let mut state = state(&catalog, Instant::now());
        state.handle(Message::ToggleFaq(0), &catalog);
        {
            let _full = state.view(&catalog, &i18n);
        }

        let empty = Catalog::default();
        let _empty = State::new(TestimonialCarousel::new(0, INTERVAL, Instant::now()))
            .view(&empty, &i18n);
    }
}
