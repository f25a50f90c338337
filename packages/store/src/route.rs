//! Hash routes and the static tab table.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

const AUTHOR_PREFIX: &str = "/author/";

/// Characters escaped when an id is written into a fragment.
const FRAGMENT_ID: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// A navigation tab shown in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
    pub route: ViewRoute,
}

pub static TABS: [Tab; 4] = [
    Tab {
        id: "home",
        label: "الرئيسية",
        route: ViewRoute::Home,
    },
    Tab {
        id: "quotes",
        label: "أقوال مأثورة",
        route: ViewRoute::Quotes,
    },
    Tab {
        id: "poetry",
        label: "شعر عربي",
        route: ViewRoute::Poetry,
    },
    Tab {
        id: "figures",
        label: "شخصيات تاريخية",
        route: ViewRoute::Figures,
    },
];

/// The view selected by the current location hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewRoute {
    #[default]
    Home,
    Quotes,
    Poetry,
    Figures,
    AuthorDetail { id: String },
}

impl ViewRoute {
    /// Parse a location hash (`"#/quotes"` or `"/quotes"`).
    ///
    /// Only exact paths match; anything unrecognised is [`ViewRoute::Home`].
    /// `location.hash` is percent-encoded, so the author id is decoded here
    /// and an id that is not valid UTF-8 once decoded is also `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);

        if let Some(rest) = path.strip_prefix(AUTHOR_PREFIX) {
            let raw = rest.split('/').next().unwrap_or_default();
            let Ok(id) = percent_decode_str(raw).decode_utf8() else {
                tracing::warn!(raw, "author id is not valid UTF-8");
                return ViewRoute::Home;
            };
            if id.is_empty() {
                return ViewRoute::Home;
            }
            return ViewRoute::AuthorDetail { id: id.into_owned() };
        }

        match path {
            "/quotes" => ViewRoute::Quotes,
            "/poetry" => ViewRoute::Poetry,
            "/figures" => ViewRoute::Figures,
            _ => ViewRoute::Home,
        }
    }

    /// Link target for anchors, including the leading `#`.
    pub fn to_hash(&self) -> String {
        match self {
            ViewRoute::Home => "#/".to_string(),
            ViewRoute::Quotes => "#/quotes".to_string(),
            ViewRoute::Poetry => "#/poetry".to_string(),
            ViewRoute::Figures => "#/figures".to_string(),
            ViewRoute::AuthorDetail { id } => {
                format!("#{AUTHOR_PREFIX}{}", utf8_percent_encode(id, FRAGMENT_ID))
            }
        }
    }

    /// Id of the tab to highlight. The author detail view highlights none.
    pub fn tab_id(&self) -> Option<&'static str> {
        match self {
            ViewRoute::Home => Some("home"),
            ViewRoute::Quotes => Some("quotes"),
            ViewRoute::Poetry => Some("poetry"),
            ViewRoute::Figures => Some("figures"),
            ViewRoute::AuthorDetail { .. } => None,
        }
    }

    pub fn needs_fetch(&self) -> bool {
        !matches!(self, ViewRoute::Home)
    }
}
