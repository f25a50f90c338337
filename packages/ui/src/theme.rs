//! Dark-mode preference: context signal, document class, and the toggle.

use dioxus::prelude::*;
use store::{prefs, Theme};

use crate::icons::{FaMoon, FaSun};
use crate::{platform, Icon};

pub type ThemeSignal = Signal<Theme>;

/// Saved theme, or the system colour scheme when nothing is saved.
pub fn load_theme() -> Theme {
    prefs::load_theme(&crate::make_preferences(), platform::system_prefers_dark())
}

/// Reflect `theme` on the document element's `dark` class.
pub fn apply_theme(theme: Theme) {
    platform::set_dark_class(theme.is_dark());
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let dark = theme().is_dark();
    let title = if dark { "الوضع الفاتح" } else { "الوضع الداكن" };

    rsx! {
        button {
            class: "icon-button theme-toggle",
            title: title,
            aria_label: title,
            onclick: move |_| {
                let next = prefs::toggle_theme(&crate::make_preferences(), theme());
                theme.set(next);
            },
            if dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
