use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Collapse whitespace runs to one space and trim the ends.
pub(crate) fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

/// Uppercase the first character, leaving the rest as-is.
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
