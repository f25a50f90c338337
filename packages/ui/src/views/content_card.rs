use dioxus::prelude::*;
use store::{text, Content};

use crate::icons::{FaCheck, FaCopy};
use crate::{platform, Icon};

#[cfg(target_arch = "wasm32")]
const COPIED_RESET_MS: u32 = 2000;

/// A quote or poem. Poems are rendered one verse per line.
#[component]
pub fn ContentCard(
    content: Content,
    /// Show the embedded author's name as a link.
    #[props(default = true)]
    show_author: bool,
) -> Element {
    let mut copied = use_signal(|| false);

    let copy = {
        let text = content.text.clone();
        move |_| {
            let text = text.clone();
            spawn(async move {
                if platform::copy_text(&text).await {
                    copied.set(true);
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
                    copied.set(false);
                }
            });
        }
    };

    let verses = if content.is_poem() {
        text::verses(&content.text)
    } else {
        Vec::new()
    };

    let kind = content.kind.as_str();

    rsx! {
        article {
            class: "content-card {kind}",

            if content.is_poem() {
                div {
                    class: "poem-verses",
                    for (i, verse) in verses.iter().enumerate() {
                        p { key: "{i}", class: "verse", "{verse}" }
                    }
                }
            } else {
                blockquote { class: "quote-text", "{content.text}" }
            }

            if !content.tags().is_empty() {
                ul {
                    class: "card-tags",
                    for tag in content.tags() {
                        li { key: "{tag}", "#{tag}" }
                    }
                }
            }

            footer {
                class: "card-footer",
                if show_author {
                    if let Some(author) = content.author.as_ref() {
                        a { class: "card-author", href: author.href(), "— {author.name}" }
                    }
                }
                button {
                    class: "icon-button copy-button",
                    title: if copied() { "تم النسخ" } else { "نسخ" },
                    onclick: copy,
                    if copied() {
                        Icon { icon: FaCheck, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaCopy, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
