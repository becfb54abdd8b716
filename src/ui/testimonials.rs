// SPDX-License-Identifier: MPL-2.0
//! Client testimonials carousel.
//!
//! Built on the same [`Carousel`] core as the lightbox: manual navigation
//! pauses auto-play, timer ticks advance without touching it. Unlike the
//! lightbox it has no open/close cycle and starts playing as soon as it is
//! created.

use crate::catalog::Testimonial;
use crate::gallery::Carousel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{Element, Length};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    ToggleAutoPlay,
    Tick(Instant),
}

#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    carousel: Carousel,
}

impl TestimonialCarousel {
    /// Creates a carousel over `len` testimonials, already playing.
    #[must_use]
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        let mut carousel = Carousel::new(len, interval);
        carousel.play(now);
        Self { carousel }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Next => self.carousel.next(),
            Message::Previous => self.carousel.previous(),
            Message::GoTo(index) => {
                if !self.carousel.jump_to(index) {
                    tracing::debug!(index, len = self.carousel.len(), "ignoring testimonial jump");
                }
            }
            Message::ToggleAutoPlay => {
                self.carousel.toggle_auto_play(Instant::now());
            }
            Message::Tick(now) => {
                self.carousel.tick(now);
            }
        }
    }

    /// Re-arms the timer from a full interval if auto-play is on. Called when
    /// the carousel becomes visible, since it receives no ticks while hidden.
    pub fn restart(&mut self, now: Instant) {
        if self.carousel.is_auto_advancing() {
            self.carousel.play(now);
        }
    }

    /// When the next automatic advance is due, if one is scheduled.
    #[must_use]
    pub fn next_advance_at(&self) -> Option<Instant> {
        self.carousel.timer().deadline()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.carousel.is_auto_advancing()
    }

    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.carousel.timer().is_armed()
    }

    pub fn view<'a>(&self, testimonials: &'a [Testimonial], i18n: &I18n) -> Element<'a, Message> {
        let Some(current) = testimonials.get(self.index()) else {
            return text(i18n.tr("testimonials-empty")).into();
        };

        let play_label = if self.is_auto_advancing() {
            i18n.tr("testimonials-pause")
        } else {
            i18n.tr("testimonials-play")
        };

        let controls = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                button(text(i18n.tr("testimonials-previous")))
                    .on_press(Message::Previous)
                    .style(styles::button::tab(false)),
            )
            .push(dots(testimonials.len(), self.index()))
            .push(
                button(text(i18n.tr("testimonials-next")))
                    .on_press(Message::Next)
                    .style(styles::button::tab(false)),
            )
            .push(
                button(text(play_label))
                    .on_press(Message::ToggleAutoPlay)
                    .style(styles::button::tab(self.is_auto_advancing())),
            );

        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(card(current, i18n))
            .push(controls)
            .into()
    }
}

fn card<'a>(testimonial: &'a Testimonial, i18n: &I18n) -> Element<'a, Message> {
    let stars = "★".repeat(usize::from(testimonial.stars()));
    let rating = testimonial.stars().to_string();

    let mut author = Column::new()
        .spacing(spacing::XXS)
        .push(text(testimonial.name.as_str()).size(typography::TITLE_SM))
        .push(text(testimonial.role.as_str()).size(typography::BODY));
    if let Some(project) = testimonial.project.as_deref() {
        author = author.push(
            text(i18n.tr_with_args("testimonial-project", &[("project", project)]))
                .size(typography::CAPTION),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(text(stars).color(palette::STAR))
                .push(
                    text(i18n.tr_with_args("testimonial-rating", &[("rating", rating.as_str())]))
                        .size(typography::CAPTION),
                ),
        )
        .push(text(format!("“{}”", testimonial.quote)).size(typography::BODY_LG))
        .push(author);

    Container::new(content)
        .width(Length::Fixed(sizing::TESTIMONIAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn dots<'a>(len: usize, active: usize) -> Element<'a, Message> {
    (0..len)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let dot = container(text(""))
                .width(Length::Fixed(spacing::XS))
                .height(Length::Fixed(spacing::XS));
            row.push(
                button(dot)
                    .padding(spacing::XXS)
                    .on_press(Message::GoTo(index))
                    .style(styles::button::tab(index == active)),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5000);

    #[test]
    fn starts_playing() {
        let carousel = TestimonialCarousel::new(3, INTERVAL, Instant::now());
        assert!(carousel.is_auto_advancing());
        assert!(carousel.needs_ticks());
    }

    #[test]
    fn tick_advances_after_interval_and_keeps_playing() {
        let start = Instant::now();
        let mut carousel = TestimonialCarousel::new(3, INTERVAL, start);

        carousel.handle(Message::Tick(start + Duration::from_millis(4999)));
        assert_eq!(carousel.index(), 0);

        carousel.handle(Message::Tick(start + INTERVAL));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn restart_rearms_from_a_full_interval() {
        let start = Instant::now();
        let mut carousel = TestimonialCarousel::new(3, INTERVAL, start);

        let shown = start + Duration::from_secs(60);
        carousel.restart(shown);
        assert_eq!(carousel.next_advance_at(), Some(shown + INTERVAL));

        carousel.handle(Message::Tick(shown + Duration::from_millis(100)));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn restart_keeps_a_paused_carousel_paused() {
        let start = Instant::now();
        let mut carousel = TestimonialCarousel::new(3, INTERVAL, start);
        carousel.handle(Message::Next);

        carousel.restart(start + INTERVAL);
        assert!(!carousel.is_auto_advancing());
        assert_eq!(carousel.next_advance_at(), None);
    }

    #[test]
    fn manual_navigation_pauses() {
        let mut carousel = TestimonialCarousel::new(3, INTERVAL, Instant::now());
        carousel.handle(Message::Previous);
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.needs_ticks());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = TestimonialCarousel::new(3, INTERVAL, Instant::now());
        carousel.handle(Message::GoTo(7));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_auto_advancing());

        carousel.handle(Message::GoTo(2));
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn empty_carousel_never_plays() {
        let mut carousel = TestimonialCarousel::new(0, INTERVAL, Instant::now());
        assert!(!carousel.is_auto_advancing());
        carousel.handle(Message::Next);
        carousel.handle(Message::ToggleAutoPlay);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn view_renders_with_and_without_testimonials() {
        let i18n = I18n::default();
        let carousel = TestimonialCarousel::new(1, INTERVAL, Instant::now());
        let testimonials = vec![Testimonial {
            name: "Sarah Johnson".into(),
            role: "CEO".into(),
            project: Some("CarHub".into()),
            quote: "Great work".into(),
            rating: 5,
        }];
        let _element = carousel.view(&testimonials, &i18n);
        let _empty = carousel.view(&[], &i18n);
    }
}
