//! Client-side tag filtering over a listing of contents.

use crate::models::Content;

/// Every tag used by `items`, each once, in first-seen order.
pub fn unique_tags<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Content>,
{
    let mut seen = Vec::<String>::new();
    for tag in items.into_iter().flat_map(Content::tags) {
        if !seen.contains(tag) {
            seen.push(tag.clone());
        }
    }
    seen
}

/// Items carrying `selected`, or all items when nothing is selected.
pub fn filter_by_tag<'a>(items: &'a [Content], selected: Option<&str>) -> Vec<&'a Content> {
    match selected {
        None => items.iter().collect(),
        Some(tag) => items.iter().filter(|item| item.has_tag(tag)).collect(),
    }
}

/// Next selection after clicking `tag`. Clicking the active tag clears it.
pub fn toggle_tag(current: Option<&str>, tag: &str) -> Option<String> {
    if current == Some(tag) {
        None
    } else {
        Some(tag.to_string())
    }
}
