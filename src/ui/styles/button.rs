// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::ACCENT_300, palette::ACCENT_500, shadow::MD),
        button::Status::Disabled => (palette::INK_200, palette::INK_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::ACCENT_500, palette::ACCENT_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Lightbox controls drawn over the image (arrows, close, play/pause).
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Navigation tabs and filter chips. The selected one is filled.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return primary(theme, status);
        }

        let extended = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(extended.background.strong.color))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color: extended.background.base.text,
            border: Border {
                color: extended.background.strong.color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Lightbox thumbnail; the active one gets an accent border.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if active {
            palette::ACCENT_500
        } else if status == button::Status::Hovered {
            palette::INK_200
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text link.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        button::Status::Disabled => extended.background.weak.text,
        button::Status::Active => extended.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
