// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Projects,
    Freelance,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::About,
        Screen::Projects,
        Screen::Freelance,
    ];

    /// Returns the i18n message key for the navigation label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::About => "nav-about",
            Screen::Projects => "nav-projects",
            Screen::Freelance => "nav-freelance",
        }
    }
}
