//! Route to fetch mapping.

use store::{ContentKind, ViewData, ViewRoute};

use crate::error::ApiError;
use crate::source::ContentSource;

/// Run the fetches `route` needs and collect them into [`ViewData`].
///
/// The author detail view is two requests: the author row, then their
/// contents. A missing author yields [`ViewData::AuthorMissing`] without the
/// second request.
pub async fn load_view<S: ContentSource>(source: &S, route: &ViewRoute) -> Result<ViewData, ApiError> {
    let data = match route {
        ViewRoute::Home => ViewData::Nothing,
        ViewRoute::Quotes => ViewData::Contents(source.contents_of_kind(ContentKind::Quote).await?),
        ViewRoute::Poetry => ViewData::Contents(source.contents_of_kind(ContentKind::Poem).await?),
        ViewRoute::Figures => ViewData::Figures(source.authors().await?),
        ViewRoute::AuthorDetail { id } => match source.author(id).await? {
            Some(author) => {
                let contents = source.contents_by_author(id).await?;
                ViewData::Author { author, contents }
            }
            None => ViewData::AuthorMissing,
        },
    };
    tracing::info!(?route, "view loaded");
    Ok(data)
}
