//! Person name normalization.

use std::sync::LazyLock;

use regex::Regex;

use super::text::{capitalize_first, collapse_whitespace};

/// Anything that is not a word character, whitespace, hyphen, or apostrophe.
static NAME_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-']").expect("Invalid name regex"));

/// Clean a name and capitalize the first letter of each word.
///
/// Letters after the first keep their case, so `McDonald` survives.
pub fn normalize_name(raw: &str) -> String {
    let cleaned = NAME_DISALLOWED.replace_all(raw, "");
    collapse_whitespace(&cleaned)
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(normalize_name("  alice   smith "), "Alice Smith");
        assert_eq!(normalize_name("o'neil-jones"), "O'neil-jones");
    }

    #[test]
    fn drops_symbols() {
        assert_eq!(normalize_name("Dr. Bob!! (VIP)"), "Dr Bob VIP");
        assert_eq!(normalize_name("###"), "");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize_name("josé álvarez"), "José Álvarez");
    }
}
