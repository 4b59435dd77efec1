//! Date utilities for entry identifiers and rotation ordinals.
//!
//! Every devotional entry is keyed by its calendar date, formatted as a
//! zero-padded `YYYY-MM-DD` identifier. Parsing is deliberately total: the
//! generator must produce an entry for whatever date string it is handed,
//! so malformed identifiers degrade to defaults instead of erroring.

use chrono::{Datelike, NaiveDate};

use crate::constants::DEFAULT_PARSE_YEAR;

/// Formats a date as its canonical `YYYY-MM-DD` entry identifier.
///
/// The identifier is unique per calendar date. For four-digit years the
/// encoding is fixed-width, so identifiers sort lexicographically in
/// chronological order, which the favorites listing relies on. Years
/// outside that range (reachable only at the calendar's saturation
/// limits) carry a sign or extra digits and still round-trip through
/// [`parse_date_id`].
pub fn date_id(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Parses an entry identifier back into a calendar date, forgivingly.
///
/// This is a total function, not a validator. Missing or unparseable
/// components fall back to defaults: the year to 1970, month and day to 1.
/// A component triple that names no real calendar date (e.g. `2023-02-31`)
/// is retried with the day reset to 1, then the month as well. Canonical
/// identifiers produced by [`date_id`] always round-trip exactly.
pub fn parse_date_id(id: &str) -> NaiveDate {
    let trimmed = id.trim();
    // date_id renders negative years with a leading sign; peel it off so
    // the year token keeps its sign instead of splitting into an empty one
    let (unsigned, sign) = match trimmed.strip_prefix('-') {
        Some(rest) => (rest, -1),
        None => (trimmed, 1),
    };
    let mut parts = unsigned.splitn(3, '-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .map(|y| sign * y)
        .unwrap_or(DEFAULT_PARSE_YEAR);
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default()
}

/// Returns the 1-based ordinal of the date within its year.
///
/// January 1 is day 1; December 31 is day 365, or 366 in a leap year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}
