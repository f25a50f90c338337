//! # Browser state
//!
//! [`BrowserState`] is the single mutable container behind the UI. It is a
//! plain struct so every transition can be tested without a renderer; the
//! `ui` crate wraps it in a `Signal` and re-renders on writes.
//!
//! A navigation is two steps:
//!
//! 1. [`BrowserState::begin`] resets the per-view state and hands out a
//!    [`Ticket`] when the route needs a fetch.
//! 2. [`BrowserState::finish`] applies the fetched [`ViewData`], but only if the
//!    ticket is still the latest one. Fetches are never cancelled, so a slow
//!    response for a route the user already left is dropped here.

use std::fmt::Display;

use crate::models::{Author, Content};
use crate::route::ViewRoute;
use crate::tags;

const LOAD_FAILED_MESSAGE: &str = "حدث خطأ أثناء تحميل البيانات. يرجى التحقق من الاتصال.";
const AUTHOR_NOT_FOUND_MESSAGE: &str = "المؤلف غير موجود";

/// Error shown in place of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// Any fetch failure: network, status, or payload.
    Failed,
    /// The author lookup returned no rows.
    AuthorNotFound,
}

impl LoadError {
    pub fn message(&self) -> &'static str {
        match self {
            LoadError::Failed => LOAD_FAILED_MESSAGE,
            LoadError::AuthorNotFound => AUTHOR_NOT_FOUND_MESSAGE,
        }
    }
}

/// What the list views render.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing {
    #[default]
    Empty,
    Contents(Vec<Content>),
    Figures(Vec<Author>),
}

/// Result of the fetches for one route.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewData {
    /// Nothing to show (the home view).
    Nothing,
    Contents(Vec<Content>),
    Figures(Vec<Author>),
    Author {
        author: Author,
        contents: Vec<Content>,
    },
    AuthorMissing,
}

/// Generation of the navigation a fetch was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserState {
    pub active: ViewRoute,
    pub loading: bool,
    pub error: Option<LoadError>,
    pub listing: Listing,
    pub selected_author: Option<Author>,
    pub selected_author_contents: Vec<Content>,
    pub active_tag: Option<String>,
    pub mobile_menu_open: bool,
    generation: u64,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start navigating to `route`.
    ///
    /// Returns `None` when the route needs no fetch.
    pub fn begin(&mut self, route: ViewRoute) -> Option<Ticket> {
        self.generation += 1;
        self.error = None;
        self.active_tag = None;
        self.mobile_menu_open = false;

        if matches!(route, ViewRoute::AuthorDetail { .. }) {
            self.selected_author = None;
            self.selected_author_contents.clear();
        } else {
            self.listing = Listing::Empty;
        }

        let needs_fetch = route.needs_fetch();
        self.active = route;
        self.loading = needs_fetch;
        needs_fetch.then_some(Ticket(self.generation))
    }

    /// Apply the outcome of a fetch started by [`begin`](Self::begin).
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn finish<E: Display>(&mut self, ticket: Ticket, outcome: Result<ViewData, E>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(route = ?self.active, "dropping stale view data");
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(ViewData::Nothing) => {}
            Ok(ViewData::Contents(contents)) => self.listing = Listing::Contents(contents),
            Ok(ViewData::Figures(authors)) => self.listing = Listing::Figures(authors),
            Ok(ViewData::Author { author, contents }) => {
                self.selected_author = Some(author);
                self.selected_author_contents = contents;
            }
            Ok(ViewData::AuthorMissing) => {
                tracing::warn!(route = ?self.active, "author not found");
                self.error = Some(LoadError::AuthorNotFound);
            }
            Err(e) => {
                tracing::error!(route = ?self.active, "failed to load view: {e}");
                self.error = Some(LoadError::Failed);
            }
        }
        true
    }

    /// Toggle the tag filter. Selecting the active tag again clears it.
    pub fn select_tag(&mut self, tag: &str) {
        self.active_tag = tags::toggle_tag(self.active_tag.as_deref(), tag);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Contents of the current listing, before tag filtering.
    pub fn contents(&self) -> &[Content] {
        match &self.listing {
            Listing::Contents(contents) => contents,
            _ => &[],
        }
    }

    pub fn figures(&self) -> &[Author] {
        match &self.listing {
            Listing::Figures(authors) => authors,
            _ => &[],
        }
    }

    pub fn unique_tags(&self) -> Vec<String> {
        tags::unique_tags(self.contents())
    }

    /// Contents of the current listing that pass the active tag filter.
    pub fn visible_contents(&self) -> Vec<&Content> {
        tags::filter_by_tag(self.contents(), self.active_tag.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentKind;

    fn quote(id: &str, tags: &[&str]) -> Content {
        Content {
            id: id.to_string(),
            kind: ContentKind::Quote,
            text: "قول".to_string(),
            tags: Some(tags.iter().map(|s| s.to_string()).collect()),
            author_id: Some("1".to_string()),
            author: None,
        }
    }

    fn author(id: &str) -> Author {
        Author {
            id: id.to_string(),
            name: "الجاحظ".to_string(),
            bio: None,
            era: None,
            image_url: None,
        }
    }

    #[test]
    fn test_home_needs_no_fetch() {
        let mut state = BrowserState::new();
        assert!(state.begin(ViewRoute::Home).is_none());
        assert!(!state.loading);
        assert_eq!(state.active, ViewRoute::Home);
    }

    #[test]
    fn test_quotes_load() {
        let mut state = BrowserState::new();
        let ticket = state.begin(ViewRoute::Quotes).unwrap();
        assert!(state.loading);

        let applied = state.finish::<String>(ticket, Ok(ViewData::Contents(vec![quote("1", &["حكمة"])])));
        assert!(applied);
        assert!(!state.loading);
        assert_eq!(state.contents().len(), 1);
        assert_eq!(state.unique_tags(), ["حكمة"]);
    }

    #[test]
    fn test_begin_resets_filter_error_and_listing() {
        let mut state = BrowserState::new();
        let ticket = state.begin(ViewRoute::Quotes).unwrap();
        state.finish::<String>(ticket, Ok(ViewData::Contents(vec![quote("1", &["حكمة"])])));
        state.select_tag("حكمة");
        state.toggle_mobile_menu();
        state.error = Some(LoadError::Failed);

        state.begin(ViewRoute::Poetry);
        assert!(state.active_tag.is_none());
        assert!(state.error.is_none());
        assert!(!state.mobile_menu_open);
        assert_eq!(state.listing, Listing::Empty);
    }

    #[test]
    fn test_author_detail_keeps_listing() {
        let mut state = BrowserState::new();
        let ticket = state.begin(ViewRoute::Figures).unwrap();
        state.finish::<String>(ticket, Ok(ViewData::Figures(vec![author("1")])));

        let ticket = state
            .begin(ViewRoute::AuthorDetail { id: "1".to_string() })
            .unwrap();
        assert_eq!(state.figures().len(), 1);
        assert!(state.selected_author.is_none());

        state.finish::<String>(
            ticket,
            Ok(ViewData::Author {
                author: author("1"),
                contents: vec![quote("5", &[])],
            }),
        );
        assert_eq!(state.selected_author.as_ref().map(|a| a.id.as_str()), Some("1"));
        assert_eq!(state.selected_author_contents.len(), 1);
    }

    #[test]
    fn test_author_missing_sets_specific_error() {
        let mut state = BrowserState::new();
        let ticket = state
            .begin(ViewRoute::AuthorDetail { id: "404".to_string() })
            .unwrap();
        state.finish::<String>(ticket, Ok(ViewData::AuthorMissing));
        assert_eq!(state.error, Some(LoadError::AuthorNotFound));
        assert_eq!(state.error.unwrap().message(), "المؤلف غير موجود");
    }

    #[test]
    fn test_failure_sets_generic_error() {
        let mut state = BrowserState::new();
        let ticket = state.begin(ViewRoute::Figures).unwrap();
        state.finish(ticket, Err("connection refused"));
        assert_eq!(state.error, Some(LoadError::Failed));
        assert!(!state.loading);
        assert_eq!(state.listing, Listing::Empty);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = BrowserState::new();
        let stale = state.begin(ViewRoute::Quotes).unwrap();
        let fresh = state.begin(ViewRoute::Poetry).unwrap();

        assert!(!state.finish::<String>(stale, Ok(ViewData::Contents(vec![quote("1", &[])]))));
        assert!(state.loading);
        assert_eq!(state.listing, Listing::Empty);

        assert!(state.finish::<String>(fresh, Ok(ViewData::Contents(vec![]))));
        assert!(!state.loading);
    }

    #[test]
    fn test_home_supersedes_pending_fetch() {
        let mut state = BrowserState::new();
        let pending = state.begin(ViewRoute::Figures).unwrap();
        state.begin(ViewRoute::Home);
        assert!(!state.loading);
        assert!(!state.finish::<String>(pending, Ok(ViewData::Figures(vec![author("1")]))));
        assert!(state.figures().is_empty());
    }

    #[test]
    fn test_tag_filter_toggles() {
        let mut state = BrowserState::new();
        let ticket = state.begin(ViewRoute::Quotes).unwrap();
        state.finish::<String>(
            ticket,
            Ok(ViewData::Contents(vec![quote("1", &["حب"]), quote("2", &["صبر"])])),
        );

        state.select_tag("حب");
        let ids: Vec<_> = state.visible_contents().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, ["1"]);

        state.select_tag("حب");
        assert!(state.active_tag.is_none());
        assert_eq!(state.visible_contents().len(), 2);
    }
}
