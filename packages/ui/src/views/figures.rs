use dioxus::prelude::*;
use store::Author;

use crate::icons::FaUser;
use crate::{use_browser, Icon};

#[component]
pub fn FiguresView() -> Element {
    let state = use_browser();
    let figures = state.read().figures().to_vec();

    rsx! {
        section {
            class: "figures",
            h1 { class: "view-title", "شخصيات تاريخية" }
            if figures.is_empty() {
                p { class: "view-muted", "لا توجد شخصيات لعرضها." }
            }
            div {
                class: "figures-grid",
                for author in figures {
                    FigureCard { key: "{author.id}", author: author.clone() }
                }
            }
        }
    }
}

#[component]
fn FigureCard(author: Author) -> Element {
    rsx! {
        a {
            class: "figure-card",
            href: author.href(),
            AuthorPortrait { author: author.clone() }
            h2 { "{author.name}" }
            if let Some(era) = author.era.as_ref() {
                span { class: "figure-era", "{era}" }
            }
        }
    }
}

#[component]
pub fn AuthorPortrait(author: Author) -> Element {
    match author.image_url.as_ref() {
        Some(src) => rsx! {
            img { class: "portrait", src: "{src}", alt: "{author.name}" }
        },
        None => rsx! {
            div { class: "portrait portrait-placeholder",
                Icon { icon: FaUser, width: 28, height: 28 }
            }
        },
    }
}
