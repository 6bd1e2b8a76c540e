//! Date normalization and locale-aware formatting
//!
//! Date-only strings like "2024-01-15" are parsed as UTC midnight, which
//! means naive local formatting renders the previous day in negative-offset
//! timezones. These helpers sidestep that by reinterpreting the parsed
//! value's UTC year/month/day as a local calendar date before formatting.

use crate::constants::DEFAULT_LOCALE;
use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime};

/// Parse a date-ish string and reduce it to its UTC calendar date.
///
/// Accepts RFC 3339, a naive datetime, or a plain YYYY-MM-DD (treated as
/// UTC midnight, matching how ISO date-only strings are parsed upstream).
fn parse_utc_ymd(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.to_utc().date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn resolve_locale(locale: &str) -> Option<Locale> {
    // BCP 47 tags use hyphens, chrono's locale data uses underscores
    Locale::try_from(locale.replace('-', "_").as_str()).ok()
}

/// Whether a locale tag resolves to known locale data
pub fn locale_is_known(locale: &str) -> bool {
    resolve_locale(locale).is_some()
}

/// Format a date string for display (numeric day, short month, numeric
/// year) in the given locale.
///
/// Unparseable input and unknown locales both return the input unchanged;
/// no error ever surfaces to the caller.
pub fn format_date(input: &str, locale: &str) -> String {
    let Some(date) = parse_utc_ymd(input) else {
        return input.to_string();
    };
    let Some(locale) = resolve_locale(locale) else {
        return input.to_string();
    };
    date.format_localized("%-d %b %Y", locale).to_string()
}

/// Same normalization as [`format_date`], returning the date value itself.
/// Defaults to today's local date on parse failure.
pub fn create_local_date(input: &str) -> NaiveDate {
    parse_utc_ymd(input).unwrap_or_else(|| Local::now().date_naive())
}

/// Fixed-locale convenience wrapper for post timestamps
pub fn format_post_date(input: &str) -> String {
    format_date(input, DEFAULT_LOCALE)
}
