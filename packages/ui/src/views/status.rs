use dioxus::prelude::*;

use crate::icons::FaRotateRight;
use crate::{use_dispatcher, Icon};

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "status status-loading",
            role: "status",
            span { class: "spinner" }
            p { "جاري التحميل..." }
        }
    }
}

/// Error message with a retry button that re-dispatches the current hash.
#[component]
pub fn ErrorBanner(message: &'static str) -> Element {
    let dispatcher = use_dispatcher();

    rsx! {
        div {
            class: "status status-error",
            role: "alert",
            p { "{message}" }
            button {
                class: "primary",
                onclick: move |_| dispatcher.retry(),
                Icon { icon: FaRotateRight, width: 14, height: 14 }
                span { "إعادة المحاولة" }
            }
        }
    }
}
