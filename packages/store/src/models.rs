//! # Domain models for authors and contents
//!
//! Records are owned by the hosted data store and consumed as-is. These types
//! only describe the fields the browser renders; anything else in the payload
//! is ignored.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Author`] | A historical figure. Has many [`Content`] rows through `contents.author_id`. |
//! | [`Content`] | A quote or a poem. Carries its body text, optional tags, and a back-reference to its author (and the embedded author record when the query asks for it). |
//!
//! Identifiers arrive as JSON numbers or strings depending on the table's
//! column type, so both are accepted and stored as strings.

use serde::{Deserialize, Deserializer, Serialize};

/// A historical figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "biography")]
    pub bio: Option<String>,
    #[serde(default)]
    pub era: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

impl Author {
    /// Hash link to this author's detail view.
    pub fn href(&self) -> String {
        crate::route::ViewRoute::AuthorDetail {
            id: self.id.clone(),
        }
        .to_hash()
    }
}

/// The two content subtypes the store distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Quote,
    Poem,
    #[serde(other)]
    Other,
}

impl ContentKind {
    /// Value used in the `type=eq.<value>` filter and as the card class.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Quote => "quote",
            ContentKind::Poem => "poem",
            ContentKind::Other => "other",
        }
    }
}

/// A quote or a poem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Free-text body.
    #[serde(default, alias = "content", alias = "body")]
    pub text: String,
    /// `None` when the column is null or missing.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub author_id: Option<String>,
    /// Present when the query embeds `author:authors(*)`.
    #[serde(default)]
    pub author: Option<Author>,
}

impl Content {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    pub fn is_poem(&self) -> bool {
        self.kind == ContentKind::Poem
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn opt_id_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_with_embedded_author() {
        let json = r#"{
            "id": 7,
            "type": "quote",
            "text": "العلم نور",
            "tags": ["حكمة", "علم"],
            "author_id": 3,
            "author": { "id": 3, "name": "علي بن أبي طالب", "era": "الراشدون" }
        }"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.id, "7");
        assert_eq!(content.kind, ContentKind::Quote);
        assert_eq!(content.tags(), ["حكمة", "علم"]);
        assert_eq!(content.author_id.as_deref(), Some("3"));
        let author = content.author.unwrap();
        assert_eq!(author.name, "علي بن أبي طالب");
        assert_eq!(author.era.as_deref(), Some("الراشدون"));
        assert!(author.bio.is_none());
    }

    #[test]
    fn test_null_tags_and_string_ids() {
        let json = r#"{ "id": "a1b2", "type": "poem", "content": "بيت", "tags": null, "author_id": null }"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.id, "a1b2");
        assert!(content.is_poem());
        assert_eq!(content.text, "بيت");
        assert!(content.tags().is_empty());
        assert!(!content.has_tag("حب"));
        assert!(content.author_id.is_none());
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let json = r#"{ "id": 1, "type": "story", "text": "" }"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert_eq!(content.kind, ContentKind::Other);
        assert_eq!(content.kind.as_str(), "other");
        assert!(!content.is_poem());
    }

    #[test]
    fn test_author_href() {
        let author: Author = serde_json::from_str(r#"{ "id": 12, "name": "المتنبي" }"#).unwrap();
        assert_eq!(author.href(), "#/author/12");
    }
}
