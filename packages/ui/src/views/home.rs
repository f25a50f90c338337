use dioxus::prelude::*;
use store::ViewRoute;

use crate::icons::{FaBookOpen, FaFeather, FaLandmark};
use crate::Icon;

/// Landing view. Shows the three sections; nothing is fetched.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        section {
            class: "home",
            div {
                class: "home-hero",
                h1 { "من روائع الأدب العربي" }
                p { "أقوال مأثورة وقصائد خالدة وسير أعلام صنعوا تاريخ الفكر والبيان." }
            }
            div {
                class: "home-cards",
                HomeCard {
                    href: ViewRoute::Quotes.to_hash(),
                    title: "أقوال مأثورة",
                    blurb: "حكم وأقوال تناقلتها الأجيال.",
                    Icon { icon: FaBookOpen, width: 28, height: 28 }
                }
                HomeCard {
                    href: ViewRoute::Poetry.to_hash(),
                    title: "شعر عربي",
                    blurb: "أبيات من عيون الشعر العربي.",
                    Icon { icon: FaFeather, width: 28, height: 28 }
                }
                HomeCard {
                    href: ViewRoute::Figures.to_hash(),
                    title: "شخصيات تاريخية",
                    blurb: "أعلام الأدب والفكر وآثارهم.",
                    Icon { icon: FaLandmark, width: 28, height: 28 }
                }
            }
        }
    }
}

#[component]
fn HomeCard(href: String, title: &'static str, blurb: &'static str, children: Element) -> Element {
    rsx! {
        a {
            class: "home-card",
            href: href,
            div { class: "home-card-icon", {children} }
            h2 { "{title}" }
            p { "{blurb}" }
        }
    }
}
