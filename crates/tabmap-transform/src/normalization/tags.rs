//! Tag list normalization.

use std::sync::LazyLock;

use regex::Regex;

use super::text::collapse_whitespace;

/// Commas separate tags, so they are kept along with hyphens.
static TAG_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s,\-]").expect("Invalid tag regex"));

/// Strip symbols from a comma-separated tag list and tidy its spacing.
pub fn normalize_tags(raw: &str) -> String {
    let cleaned = TAG_DISALLOWED.replace_all(raw, "");
    collapse_whitespace(&cleaned)
}
