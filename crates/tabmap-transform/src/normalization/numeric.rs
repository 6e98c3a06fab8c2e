//! Numeric normalization utilities.

/// True when a value reads as a finite number (`150`, `-2.5`, `1e3`).
pub fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Reduce a points value to an integer string.
///
/// Everything except ASCII digits and `-` is dropped, then the leading
/// integer of what remains is read: an optional `-` followed by the first
/// run of digits. `"5-3"` reads as `5`. Leading zeros are removed, and a
/// value with no leading integer becomes `"0"`. The result is built from the
/// digit string, so arbitrarily long values never overflow.
pub fn normalize_points(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect();
    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let run_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest[..run_end].trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}
