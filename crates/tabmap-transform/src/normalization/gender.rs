//! Gender normalization.

use std::sync::LazyLock;

use regex::Regex;

use super::text::capitalize_first;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid gender regex"));

const MALE: &[&str] = &["m", "male", "man", "boy", "gent", "gentleman", "sir"];
const FEMALE: &[&str] = &["f", "female", "woman", "girl", "lady", "madam"];
// Hyphens are stripped before matching, so "non-binary" arrives as "nonbinary".
const OTHER: &[&str] = &["o", "other", "nonbinary", "non binary", "nb", "neutral", "n"];

/// Fold gender synonyms to `Male`, `Female`, or `Other`. Unknown values are
/// lowercased with the first letter capitalized.
pub fn normalize_gender(raw: &str) -> String {
    let cleaned = NON_WORD.replace_all(raw, "");
    let key = cleaned.trim().to_lowercase();
    if MALE.contains(&key.as_str()) {
        "Male".to_string()
    } else if FEMALE.contains(&key.as_str()) {
        "Female".to_string()
    } else if OTHER.contains(&key.as_str()) {
        "Other".to_string()
    } else {
        capitalize_first(&key)
    }
}
