//! Line-break normalization for poem bodies.
//!
//! Poems in the store use two ad-hoc separators between verses: an ellipsis
//! (`" ... "`) and a literal slash-n (`"/n"`). Both become `\n`; real line
//! breaks already in the text are kept.

use std::sync::LazyLock;

use regex::Regex;

static ELLIPSIS_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.\.\.\s*").expect("static pattern"));

pub fn format_poetry(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ELLIPSIS_BREAK.replace_all(text, "\n").replace("/n", "\n")
}

/// The normalized text split into verse lines.
pub fn verses(text: &str) -> Vec<String> {
    format_poetry(text).lines().map(str::to_string).collect()
}
