use dioxus::prelude::*;

use crate::icons::FaTag;
use crate::{use_browser, Icon};

/// One chip per tag in the current listing. Clicking the active chip clears
/// the filter.
#[component]
pub fn TagBar() -> Element {
    let mut state = use_browser();
    let tags = state.read().unique_tags();
    let active = state.read().active_tag.clone();

    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tag-bar",
            Icon { icon: FaTag, width: 12, height: 12 }
            for tag in tags {
                button {
                    key: "{tag}",
                    class: if active.as_ref() == Some(&tag) { "tag-chip active" } else { "tag-chip" },
                    onclick: {
                        let tag = tag.clone();
                        move |_| state.write().select_tag(&tag)
                    },
                    "{tag}"
                }
            }
        }
    }
}
