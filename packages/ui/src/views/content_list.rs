use dioxus::prelude::*;

use super::{ContentCard, TagBar};
use crate::use_browser;

/// Quotes or poems from the current listing, filtered by the active tag.
#[component]
pub fn ContentListView(title: &'static str, poetry: bool) -> Element {
    let state = use_browser();
    let items: Vec<_> = state.read().visible_contents().into_iter().cloned().collect();

    rsx! {
        section {
            class: if poetry { "content-list poetry" } else { "content-list quotes" },
            h1 { class: "view-title", "{title}" }
            TagBar {}
            if items.is_empty() {
                p { class: "view-muted", "لا توجد عناصر لعرضها." }
            }
            div {
                class: "content-grid",
                for item in items {
                    ContentCard { key: "{item.id}", content: item.clone() }
                }
            }
        }
    }
}
