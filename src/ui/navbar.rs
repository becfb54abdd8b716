// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with one tab per screen.

use crate::app::screen::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Screen),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_MD)
        .width(Length::Fill);

    let row = Screen::ALL.iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .padding(spacing::SM)
            .align_y(Vertical::Center)
            .push(title),
        |row, screen| {
            row.push(
                button(Text::new(ctx.i18n.tr(screen.i18n_key())))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::Navigate(*screen))
                    .style(styles::button::tab(*screen == ctx.current)),
            )
        },
    );

    Container::new(row).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_renders_for_every_screen() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                current: screen,
            });
        }
    }

    #[test]
    fn every_screen_has_a_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        for screen in Screen::ALL {
            assert!(!i18n.tr(screen.i18n_key()).starts_with("MISSING"));
        }
    }
}
