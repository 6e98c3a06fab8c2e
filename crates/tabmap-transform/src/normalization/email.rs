//! Email normalization.

use std::sync::LazyLock;

use regex::Regex;

/// One `@`, then a dot somewhere in the domain part.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Lowercase an email, drop all whitespace, and return it only if it has a
/// plausible `local@domain.tld` shape.
pub fn normalize_email(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();
    if EMAIL_SHAPE.is_match(&cleaned) {
        cleaned
    } else {
        String::new()
    }
}
