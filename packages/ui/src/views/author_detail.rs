use dioxus::prelude::*;

use super::figures::AuthorPortrait;
use super::ContentCard;
use crate::icons::FaArrowRight;
use crate::{platform, use_browser, Icon};

/// A figure's header and everything attributed to them.
#[component]
pub fn AuthorDetailView() -> Element {
    let state = use_browser();
    let (author, contents) = {
        let s = state.read();
        (s.selected_author.clone(), s.selected_author_contents.clone())
    };

    let Some(author) = author else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "author-detail",
            button {
                class: "secondary back-button",
                onclick: move |_| platform::go_back(),
                Icon { icon: FaArrowRight, width: 14, height: 14 }
                span { "رجوع" }
            }

            header {
                class: "author-header",
                AuthorPortrait { author: author.clone() }
                div {
                    h1 { "{author.name}" }
                    if let Some(era) = author.era.as_ref() {
                        span { class: "figure-era", "{era}" }
                    }
                    if let Some(bio) = author.bio.as_ref() {
                        p { class: "author-bio", "{bio}" }
                    }
                }
            }

            h2 { class: "view-subtitle", "من آثاره" }
            if contents.is_empty() {
                p { class: "view-muted", "لا توجد نصوص لهذه الشخصية بعد." }
            }
            div {
                class: "content-grid",
                for content in contents {
                    ContentCard { key: "{content.id}", content: content.clone(), show_author: false }
                }
            }
        }
    }
}
