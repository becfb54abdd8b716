// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use crate::ui::about;
use crate::ui::freelance;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notice;
use crate::ui::projects;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    About(about::Message),
    Projects(projects::Message),
    Freelance(freelance::Message),
    Notice(notice::Message),
    /// Gallery action from a bound key, routed to the visible screen's gallery.
    GalleryKey(gallery::Message),
    /// Periodic tick polling the auto-advance timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file replacing the embedded one.
    /// Takes precedence over `[catalog] path` in settings.
    pub catalog: Option<String>,
    /// Optional asset base for image paths.
    /// Takes precedence over `[catalog] asset_base` in settings.
    pub asset_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
