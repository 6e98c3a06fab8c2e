//! Phone number normalization.

use std::cmp::Reverse;

use tabmap_model::PhoneOptions;

/// Normalize a phone number to its national digits.
///
/// All non-digits are removed. If the digits then start with one of the
/// configured country codes (compared by their digits, longest first) the
/// code is dropped, provided exactly `national_length` digits remain. With
/// no national length configured any non-empty remainder is accepted.
pub fn normalize_phone(raw: &str, options: &PhoneOptions) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return digits;
    }

    let mut codes: Vec<String> = options
        .country_codes
        .iter()
        .map(|code| digits_only(code))
        .filter(|code| !code.is_empty())
        .collect();
    codes.sort_by_key(|code| Reverse(code.len()));

    for code in &codes {
        let Some(rest) = digits.strip_prefix(code.as_str()) else {
            continue;
        };
        let strip = match options.national_length {
            Some(length) => rest.len() == length,
            None => !rest.is_empty(),
        };
        if strip {
            return rest.to_string();
        }
    }
    digits
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(raw: &str) -> String {
        normalize_phone(raw, &PhoneOptions::default())
    }

    #[test]
    fn strips_country_code_variants() {
        assert_eq!(phone("+91 98765 43210"), "9876543210");
        assert_eq!(phone("0091-9876543210"), "9876543210");
        assert_eq!(phone("919876543210"), "9876543210");
        assert_eq!(phone("9876543210"), "9876543210");
    }

    #[test]
    fn keeps_national_numbers_that_start_with_code_digits() {
        assert_eq!(phone("9123456789"), "9123456789");
        assert_eq!(phone("91234567"), "91234567");
    }

    #[test]
    fn removes_punctuation() {
        assert_eq!(phone("(987) 654-3210"), "9876543210");
        assert_eq!(phone("n/a"), "");
        assert_eq!(phone(""), "");
    }

    #[test]
    fn without_length_any_code_prefix_is_stripped() {
        let options = PhoneOptions {
            country_codes: vec!["+44".to_string()],
            national_length: None,
        };
        assert_eq!(normalize_phone("+44 7700 900123", &options), "7700900123");
        assert_eq!(normalize_phone("44", &options), "44");
    }
}
