//! This crate contains all UI for the browser.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;

mod repo;
pub use repo::make_preferences;

pub mod views;

pub const BROWSER_CSS: Asset = asset!("/assets/browser.css");

mod navbar;
pub use navbar::Navbar;

mod provider;
pub use provider::{use_browser, use_dispatcher, BrowserProvider, Dispatcher};

mod theme;
pub use theme::{apply_theme, load_theme, use_theme, ThemeSignal, ThemeToggle};
