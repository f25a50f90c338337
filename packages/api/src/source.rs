use store::{Author, Content, ContentKind};

use crate::client::{DataClient, Query};
use crate::error::ApiError;

pub const AUTHORS: &str = "authors";
pub const CONTENTS: &str = "contents";

const WITH_AUTHOR: &str = "*,author:authors(*)";
const ALL_COLUMNS: &str = "*";

/// The read-only queries the browser needs.
///
/// [`DataClient`] implements this over HTTP; tests use an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Every content of `kind`, each with its author embedded.
    async fn contents_of_kind(&self, kind: ContentKind) -> Result<Vec<Content>, ApiError>;

    async fn authors(&self) -> Result<Vec<Author>, ApiError>;

    /// The first author row with `id`, if any.
    async fn author(&self, id: &str) -> Result<Option<Author>, ApiError>;

    /// Contents written by author `id`, without the author embedded.
    async fn contents_by_author(&self, id: &str) -> Result<Vec<Content>, ApiError>;
}

impl ContentSource for DataClient {
    async fn contents_of_kind(&self, kind: ContentKind) -> Result<Vec<Content>, ApiError> {
        let query = Query::new().eq("type", kind.as_str()).select(WITH_AUTHOR);
        self.fetch(CONTENTS, &query).await
    }

    async fn authors(&self) -> Result<Vec<Author>, ApiError> {
        self.fetch(AUTHORS, &Query::new().select(ALL_COLUMNS)).await
    }

    async fn author(&self, id: &str) -> Result<Option<Author>, ApiError> {
        let query = Query::new().eq("id", id).select(ALL_COLUMNS);
        let rows: Vec<Author> = self.fetch(AUTHORS, &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn contents_by_author(&self, id: &str) -> Result<Vec<Content>, ApiError> {
        let query = Query::new().eq("author_id", id).select(ALL_COLUMNS);
        self.fetch(CONTENTS, &query).await
    }
}
