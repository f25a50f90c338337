use dioxus::prelude::*;
use store::TABS;

use crate::icons::{FaBars, FaXmark};
use crate::{use_browser, Icon, ThemeToggle};

/// Header with the brand, the four tabs, and the theme toggle.
///
/// On narrow screens the tabs collapse behind a menu button.
#[component]
pub fn Navbar(site_title: String) -> Element {
    let mut state = use_browser();
    let active_tab = state.read().active.tab_id();
    let menu_open = state.read().mobile_menu_open;

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                a { class: "navbar-brand", href: "#/", "{site_title}" }

                nav {
                    class: if menu_open { "navbar-tabs open" } else { "navbar-tabs" },
                    for tab in TABS.iter() {
                        a {
                            key: "{tab.id}",
                            class: if active_tab == Some(tab.id) { "navbar-tab active" } else { "navbar-tab" },
                            href: tab.route.to_hash(),
                            "{tab.label}"
                        }
                    }
                }

                div {
                    class: "navbar-actions",
                    ThemeToggle {}
                    button {
                        class: "icon-button navbar-menu-toggle",
                        aria_label: "القائمة",
                        onclick: move |_| state.write().toggle_mobile_menu(),
                        if menu_open {
                            Icon { icon: FaXmark, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaBars, width: 18, height: 18 }
                        }
                    }
                }
            }
        }
    }
}
