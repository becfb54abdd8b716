// SPDX-License-Identifier: MPL-2.0
//! Dismissible warnings raised while loading settings or the catalog.
//!
//! Notices store i18n keys and are resolved at render time, so a language
//! change also translates warnings that are already on screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    keys: Vec<String>,
}

impl Notices {
    /// Adds a warning; duplicates are shown once.
    pub fn push(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Dismiss(index) => {
                if index < self.keys.len() {
                    self.keys.remove(index);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Stack of notices anchored to the bottom-right corner.
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let column = self.keys.iter().enumerate().fold(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Right),
            |column, (index, key)| {
                let row = Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(text(i18n.tr(key)).size(typography::BODY).width(Length::Fill))
                    .push(
                        button(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                            .on_press(Message::Dismiss(index))
                            .style(styles::button::link),
                    );
                column.push(
                    Container::new(row)
                        .width(Length::Fixed(sizing::NOTICE_WIDTH))
                        .padding(spacing::SM)
                        .style(styles::container::notice),
                )
            },
        );

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_collapsed() {
        let mut notices = Notices::default();
        notices.push("notification-config-load-error");
        notices.push("notification-config-load-error");
        assert_eq!(notices.keys().len(), 1);
    }

    #[test]
    fn dismiss_removes_by_index() {
        let mut notices = Notices::default();
        notices.push("notification-config-load-error");
        notices.push("notification-catalog-load-error");

        notices.handle(Message::Dismiss(0));
        assert_eq!(notices.keys(), ["notification-catalog-load-error".to_string()]);

        notices.handle(Message::Dismiss(5));
        assert_eq!(notices.keys().len(), 1);

        notices.handle(Message::Dismiss(0));
        assert!(notices.is_empty());
    }
}
