// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio screens.
//!
//! The `App` struct wires together the catalog, localization, settings and
//! the per-screen gallery controllers, and translates messages into side
//! effects like clipboard writes. The home and projects screens each own a
//! `GalleryController`; both share one `ScrollLock`, so the page stays still
//! whenever either lightbox is open.

pub mod config;
mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::assets::asset_base_warning;
use crate::catalog::Catalog;
use crate::gallery::{GalleryController, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::ui::freelance;
use crate::ui::home;
use crate::ui::notice::Notices;
use crate::ui::projects;
use crate::ui::testimonials::TestimonialCarousel;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    catalog: Catalog,
    /// Base that catalog image paths are resolved against.
    asset_base: String,
    home: home::State,
    projects: projects::State,
    freelance: freelance::State,
    scroll_lock: ScrollLock,
    notices: Notices,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("projects", &self.catalog.projects.len())
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let (catalog, _) = Catalog::load_or_embedded(None);
        let i18n = I18n::new(None, &config);
        let asset_base = config.catalog.asset_base().to_string();
        Self::from_parts(config, catalog, asset_base, i18n)
    }
}

impl App {
    /// Loads settings and the catalog, honoring CLI overrides from `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.catalog.path.clone());
        let (catalog, catalog_warning) = Catalog::load_or_embedded(catalog_path.as_deref());

        let asset_base = flags
            .asset_base
            .unwrap_or_else(|| config.catalog.asset_base().to_string());

        let asset_warning = asset_base_warning(&asset_base);

        let mut app = Self::from_parts(config, catalog, asset_base, i18n);
        for key in [config_warning, catalog_warning, asset_warning]
            .into_iter()
            .flatten()
        {
            app.notices.push(key);
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            projects = app.catalog.projects.len(),
            testimonials = app.catalog.testimonials.len(),
            "portfolio ready"
        );
        (app, Task::none())
    }

    /// Assembles the application from already loaded parts.
    fn from_parts(config: Config, catalog: Catalog, asset_base: String, i18n: I18n) -> Self {
        let collections = Arc::new(catalog.gallery_collections(&asset_base));
        let scroll_lock = ScrollLock::new();
        let interval = config.gallery.interval();

        let home = home::State::new(GalleryController::new(
            Arc::clone(&collections),
            interval,
            scroll_lock.clone(),
        ));
        let projects = projects::State::new(
            config.catalog.per_page(),
            GalleryController::new(collections, interval, scroll_lock.clone()),
        );
        let freelance = freelance::State::new(TestimonialCarousel::new(
            catalog.testimonials.len(),
            config.testimonials.interval(),
            Instant::now(),
        ));

        Self {
            i18n,
            screen: Screen::default(),
            catalog,
            asset_base,
            home,
            projects,
            freelance,
            scroll_lock,
            notices: Notices::default(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        let open_project = self
            .active_gallery()
            .and_then(GalleryController::active_collection_key)
            .map(|key| {
                self.catalog
                    .project(key)
                    .map_or(key, |project| project.name.as_str())
            });

        match open_project {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Gallery belonging to the visible screen, if that screen has one.
    fn active_gallery(&self) -> Option<&GalleryController> {
        match self.screen {
            Screen::Home => Some(self.home.gallery()),
            Screen::Projects => Some(self.projects.gallery()),
            Screen::About | Screen::Freelance => None,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let gallery_open = self.active_gallery().is_some_and(GalleryController::is_open);
        let needs_ticks = self.home.gallery().needs_ticks()
            || self.projects.gallery().needs_ticks()
            || (self.screen == Screen::Freelance && self.freelance.needs_ticks());

        Subscription::batch([
            subscription::create_keyboard_subscription(gallery_open),
            subscription::create_tick_subscription(needs_ticks),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            catalog: &self.catalog,
            home: &mut self.home,
            projects: &mut self.projects,
            freelance: &mut self.freelance,
            notices: &mut self.notices,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Home(msg) => update::handle_home_message(&mut ctx, msg),
            Message::Projects(msg) => update::handle_projects_message(&mut ctx, msg),
            Message::About(msg) => update::handle_about_message(msg),
            Message::Freelance(msg) => update::handle_freelance_message(&mut ctx, msg),
            Message::Notice(msg) => {
                ctx.notices.handle(msg);
                Task::none()
            }
            Message::GalleryKey(msg) => update::handle_gallery_key(&mut ctx, msg),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: &self.catalog,
            asset_base: &self.asset_base,
            home: &self.home,
            projects: &self.projects,
            freelance: &self.freelance,
            notices: &self.notices,
            scroll_lock: &self.scroll_lock,
        })
    }
}
