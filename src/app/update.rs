// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::gallery;
use crate::ui::about;
use crate::ui::freelance;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notice::Notices;
use crate::ui::projects;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub catalog: &'a Catalog,
    pub home: &'a mut home::State,
    pub projects: &'a mut projects::State,
    pub freelance: &'a mut freelance::State,
    pub notices: &'a mut Notices,
}

impl UpdateContext<'_> {
    fn active_gallery_mut(&mut self) -> Option<&mut gallery::GalleryController> {
        match self.screen {
            Screen::Home => Some(self.home.gallery_mut()),
            Screen::Projects => Some(self.projects.gallery_mut()),
            Screen::About | Screen::Freelance => None,
        }
    }
}

/// Switches screens. The lightbox of the screen being left is closed so its
/// timer stops and the scroll lock is released. The testimonial carousel only
/// receives ticks while visible, so entering the freelance screen restarts
/// its countdown.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    if let Some(gallery) = ctx.active_gallery_mut() {
        gallery.close();
    }
    tracing::debug!(from = ?ctx.screen, to = ?target, "switching screen");
    *ctx.screen = target;
    if target == Screen::Freelance {
        ctx.freelance.enter(Instant::now());
    }
    Task::none()
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match ctx.home.handle(message) {
        home::Effect::None => Task::none(),
        home::Effect::CopyLink(url) => copy_link(url),
        home::Effect::ShowAllProjects => handle_screen_switch(ctx, Screen::Projects),
        home::Effect::Gallery(effect) => {
            report_gallery_effect(Screen::Home, &effect);
            Task::none()
        }
    }
}

pub fn handle_about_message(message: about::Message) -> Task<Message> {
    match message {
        about::Message::CopyLink(url) => copy_link(url),
    }
}

pub fn handle_freelance_message(
    ctx: &mut UpdateContext<'_>,
    message: freelance::Message,
) -> Task<Message> {
    ctx.freelance.handle(message, ctx.catalog);
    Task::none()
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    match ctx.projects.handle(message, ctx.catalog) {
        projects::Effect::None => Task::none(),
        projects::Effect::CopyLink(url) => copy_link(url),
        projects::Effect::Gallery(effect) => {
            report_gallery_effect(Screen::Projects, &effect);
            Task::none()
        }
    }
}

/// Applies a key-bound gallery action to the visible screen's gallery.
pub fn handle_gallery_key(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let screen = *ctx.screen;
    if let Some(gallery) = ctx.active_gallery_mut() {
        let effect = gallery.handle(message);
        report_gallery_effect(screen, &effect);
    }
    Task::none()
}

/// Polls every armed timer. Cancelled timers ignore the tick.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let home = ctx.home.gallery_mut().handle(gallery::Message::Tick(now));
    report_gallery_effect(Screen::Home, &home);
    let projects = ctx.projects.gallery_mut().handle(gallery::Message::Tick(now));
    report_gallery_effect(Screen::Projects, &projects);
    if *ctx.screen == Screen::Freelance {
        ctx.freelance.tick(now);
    }
    Task::none()
}

/// Logs what a lightbox did. Effects carry no further work: the window title
/// and the subscriptions are derived from controller state on the next frame.
fn report_gallery_effect(screen: Screen, effect: &gallery::Effect) {
    match effect {
        gallery::Effect::None => {}
        gallery::Effect::Opened { key } => tracing::info!(?screen, %key, "lightbox opened"),
        gallery::Effect::Closed => tracing::debug!(?screen, "lightbox closed"),
        gallery::Effect::Navigated { index } => tracing::trace!(?screen, index, "lightbox moved"),
        gallery::Effect::AutoPlayChanged(enabled) => {
            tracing::debug!(?screen, enabled, "lightbox auto-play changed");
        }
    }
}

fn copy_link(url: String) -> Task<Message> {
    tracing::debug!(%url, "copying project link");
    iced::clipboard::write(url)
}
