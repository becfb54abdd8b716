// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay for an open gallery.
//!
//! The view is a pure function of the controller state. It emits
//! [`gallery::Message`](crate::gallery::Message) values which the owning
//! screen routes back into its controller.
//!
//! Layout, top to bottom:
//! - header: project name, `current/total` counter, auto-play badge,
//!   play/pause and close buttons
//! - stage: previous arrow, current image, next arrow
//! - thumbnail strip with the active image highlighted

use crate::gallery::{GalleryController, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, opaque, scrollable, text, Column, Container, Row};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    /// Display name of the open collection, if the catalog knows one.
    pub title: Option<&'a str>,
}

/// Header text: the project name, or the collection key when unnamed.
pub fn title_or_key<'a>(title: Option<&'a str>, key: &'a str) -> &'a str {
    title.filter(|name| !name.trim().is_empty()).unwrap_or(key)
}

/// Renders the lightbox, or `None` while the gallery is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let key = ctx.gallery.active_collection_key()?;
    let images = ctx.gallery.active_images();
    let index = ctx.gallery.active_index();

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .push(header(&ctx, key, index, images.len()))
        .push(stage(&ctx, images.get(index).map(String::as_str)))
        .push(thumbnails(images, index));

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::overlay::backdrop);

    Some(opaque(backdrop))
}

fn header<'a>(
    ctx: &ViewContext<'a>,
    key: &'a str,
    index: usize,
    len: usize,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let current = (index + 1).to_string();
    let total = len.to_string();
    let counter = i18n.tr_with_args(
        "gallery-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            text(title_or_key(ctx.title, key))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            Container::new(text(counter).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
        );

    if ctx.gallery.is_auto_advancing() {
        row = row.push(
            Container::new(text(i18n.tr("gallery-auto-play-on")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::auto_play_badge),
        );
    }

    let play_label = if ctx.gallery.is_auto_advancing() {
        i18n.tr("gallery-pause")
    } else {
        i18n.tr("gallery-play")
    };

    row.push(control(play_label, Message::ToggleAutoPlay))
        .push(control(i18n.tr("gallery-close"), Message::Close))
        .into()
}

fn stage<'a>(ctx: &ViewContext<'a>, current: Option<&'a str>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match current {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(ctx.i18n.tr("gallery-image-missing")).into(),
    };

    let arrow = |label: &'static str, msg: Message| {
        button(
            text(label)
                .size(typography::TITLE_MD)
                .width(Length::Fill)
                .center(),
        )
        .width(Length::Fixed(sizing::NAV_ARROW))
        .height(Length::Fixed(sizing::NAV_ARROW))
        .on_press(msg)
        .style(styles::button::overlay(
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow("‹", Message::Previous))
        .push(
            container(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(arrow("›", Message::Next))
        .into()
}

fn thumbnails<'a>(images: &'a [String], active: usize) -> Element<'a, Message> {
    let strip = images.iter().enumerate().fold(
        Row::new().spacing(spacing::XS).padding(spacing::XXS),
        |row, (index, path)| {
            let is_active = index == active;
            let thumb = image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .opacity(if is_active {
                    opacity::OPAQUE
                } else {
                    opacity::THUMBNAIL_IDLE
                });

            row.push(
                button(thumb)
                    .padding(spacing::XXS)
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::thumbnail(is_active)),
            )
        },
    );

    Container::new(
        scrollable(strip).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        )),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn control<'a>(label: String, msg: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(msg)
        .style(styles::button::overlay(
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{GalleryCollections, ScrollLock};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn controller() -> GalleryController {
        let collections: GalleryCollections = [(
            "carhub",
            vec!["/images/car_1.png".to_string(), "/images/car_2.png".to_string()],
        )]
        .into_iter()
        .collect();
        GalleryController::new(
            Arc::new(collections),
            Duration::from_millis(3000),
            ScrollLock::new(),
        )
    }

    #[test]
    fn closed_gallery_renders_nothing() {
        let i18n = I18n::default();
        let gallery = controller();
        let ctx = ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            title: None,
        };
        assert!(view(ctx).is_none());
    }

    #[test]
    fn open_gallery_renders_overlay() {
        let i18n = I18n::default();
        let mut gallery = controller();
        gallery.open("carhub", Instant::now());
        let ctx = ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            title: Some("CarHub"),
        };
        assert!(view(ctx).is_some());
    }

    #[test]
    fn paused_gallery_renders_overlay() {
        let i18n = I18n::default();
        let mut gallery = controller();
        gallery.open("carhub", Instant::now());
        gallery.next();
        let ctx = ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            title: None,
        };
        assert!(view(ctx).is_some());
    }

    #[test]
    fn title_falls_back_to_key() {
        assert_eq!(title_or_key(Some("CarHub"), "carhub"), "CarHub");
        assert_eq!(title_or_key(None, "carhub"), "carhub");
        assert_eq!(title_or_key(Some("  "), "carhub"), "carhub");
    }
}
