use dioxus::prelude::*;
use store::ViewRoute;

use crate::use_browser;

mod content_card;
pub use content_card::ContentCard;

mod tag_bar;
pub use tag_bar::TagBar;

mod status;
pub use status::{ErrorBanner, LoadingIndicator};

mod home;
pub use home::HomeView;

mod content_list;
pub use content_list::ContentListView;

mod figures;
pub use figures::FiguresView;

mod author_detail;
pub use author_detail::AuthorDetailView;

/// The view for the active route, with the loading and error states on top.
#[component]
pub fn ActiveView() -> Element {
    let state = use_browser();
    let (active, loading, error) = {
        let s = state.read();
        (s.active.clone(), s.loading, s.error)
    };

    if loading {
        return rsx! { LoadingIndicator {} };
    }
    if let Some(error) = error {
        return rsx! { ErrorBanner { message: error.message() } };
    }

    match active {
        ViewRoute::Home => rsx! { HomeView {} },
        ViewRoute::Quotes => rsx! {
            ContentListView { title: "أقوال مأثورة", poetry: false }
        },
        ViewRoute::Poetry => rsx! {
            ContentListView { title: "شعر عربي", poetry: true }
        },
        ViewRoute::Figures => rsx! { FiguresView {} },
        ViewRoute::AuthorDetail { .. } => rsx! { AuthorDetailView {} },
    }
}
