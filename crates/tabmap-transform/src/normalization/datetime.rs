//! Date parsing and formatting.
//!
//! Accepted shapes, tried in order:
//! - all digits: 8 digits as `YYYYMMDD`, 9-10 digits as epoch seconds,
//!   longer as epoch milliseconds
//! - `D{1,2}[/-.]D{1,2}[/-.]D{4}`: day first unless [`DateOrder::MonthFirst`]
//! - `D{4}[/-.]D{1,2}[/-.]D{1,2}`: year, month, day
//! - month names: `15-Jan-2024`, `15 January 2024`, `Jan 15, 2024`
//!
//! The separator shapes may carry a trailing `H:MM` time after `T` or a
//! space; it is ignored. Any other trailing text rejects the value. Output
//! is always `YYYY-MM-DD`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::{Captures, Regex};
use tabmap_model::DateOrder;

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})(?:[T\s]\d{1,2}:\d{2}.*)?$")
        .expect("Invalid day-month-year regex")
});

static YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})(?:[T\s]\d{1,2}:\d{2}.*)?$")
        .expect("Invalid year-month-day regex")
});

/// Month-name formats. `%B` reads both `Jan` and `January`.
const MONTH_NAME_FORMATS: &[&str] = &[
    "%d-%B-%Y", // 15-Jan-2024
    "%d %B %Y", // 15 January 2024
    "%d/%B/%Y",
    "%B %d, %Y", // January 15, 2024
    "%B %d %Y",
];

/// Normalize a date to `YYYY-MM-DD`, or an empty string when it cannot be
/// read as a real calendar date.
pub fn normalize_date(raw: &str, order: DateOrder) -> String {
    parse_date(raw, order)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse a date in any accepted shape.
pub fn parse_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return parse_numeric(trimmed);
    }

    if let Some(caps) = DAY_MONTH_YEAR.captures(trimmed) {
        let (first, second) = (capture_u32(&caps, 1)?, capture_u32(&caps, 2)?);
        let year = capture_i32(&caps, 3)?;
        let (day, month) = match order {
            DateOrder::DayFirst => (first, second),
            DateOrder::MonthFirst => (second, first),
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = YEAR_MONTH_DAY.captures(trimmed) {
        return NaiveDate::from_ymd_opt(
            capture_i32(&caps, 1)?,
            capture_u32(&caps, 2)?,
            capture_u32(&caps, 3)?,
        );
    }

    MONTH_NAME_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn parse_numeric(digits: &str) -> Option<NaiveDate> {
    match digits.len() {
        0..=7 => None,
        8 => parse_compact(digits),
        9 | 10 => from_epoch_seconds(digits),
        _ => from_epoch_millis(digits),
    }
}

/// `YYYYMMDD`.
fn parse_compact(digits: &str) -> Option<NaiveDate> {
    let year = digits.get(0..4)?.parse().ok()?;
    let month = digits.get(4..6)?.parse().ok()?;
    let day = digits.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn from_epoch_seconds(digits: &str) -> Option<NaiveDate> {
    let seconds: i64 = digits.parse().ok()?;
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

fn from_epoch_millis(digits: &str) -> Option<NaiveDate> {
    let millis: i64 = digits.parse().ok()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

fn capture_u32(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn capture_i32(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group)?.as_str().parse().ok()
}
