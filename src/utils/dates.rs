//! Date helpers for building queries and displaying entries.
//!
//! All arithmetic happens on UTC calendar dates, the same calendar the API
//! uses for its `date` field.

use crate::domain::query::QUERY_DATE_FORMAT;
use crate::error::ApodError;
use chrono::{DateTime, Locale, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Locale used for human-readable dates.
pub const DISPLAY_LOCALE: Locale = Locale::es_ES;

/// Long-form pattern: weekday, day, month name, year.
const DISPLAY_FORMAT: &str = "%A, %-d de %B de %Y";

/// Formats a timestamp as its UTC calendar date, `YYYY-MM-DD`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(QUERY_DATE_FORMAT).to_string()
}

/// Returns the date `days` calendar days before today, as `YYYY-MM-DD`.
///
/// Negative values count forward.
///
/// # Errors
///
/// Returns [`ApodError::DateOutOfRange`] if the result is not representable.
pub fn days_ago(days: i64) -> Result<String, ApodError> {
    days_ago_from(Utc::now(), days)
}

/// Same as [`days_ago`] with an explicit "now".
pub fn days_ago_from(now: DateTime<Utc>, days: i64) -> Result<String, ApodError> {
    let date = date_days_ago_from(now, days)?;
    Ok(date.format(QUERY_DATE_FORMAT).to_string())
}

/// Calendar date `days` days before `now` in UTC.
///
/// # Errors
///
/// Returns [`ApodError::DateOutOfRange`] if the result is not representable.
pub fn date_days_ago_from(now: DateTime<Utc>, days: i64) -> Result<NaiveDate, ApodError> {
    TimeDelta::try_days(days)
        .and_then(|delta| now.date_naive().checked_sub_signed(delta))
        .ok_or(ApodError::DateOutOfRange { days })
}

/// Parses `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
///
/// # Errors
///
/// Returns [`ApodError::InvalidDate`] when neither form matches.
pub fn parse_date(input: &str) -> Result<NaiveDate, ApodError> {
    let trimmed = input.trim();

    match NaiveDate::parse_from_str(trimmed, QUERY_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(date_err) => DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| ApodError::InvalidDate {
                input: input.to_string(),
                source: date_err,
            }),
    }
}

/// Renders a date string as a long-form display date in [`DISPLAY_LOCALE`],
/// e.g. `2024-03-15` → `viernes, 15 de marzo de 2024`.
///
/// The calendar date is rendered as given; no time-zone shift is applied.
///
/// # Errors
///
/// Returns [`ApodError::InvalidDate`] if the input does not parse.
pub fn format_date_locale(input: &str) -> Result<String, ApodError> {
    parse_date(input).map(format_naive_date_locale)
}

/// Display form of an already-parsed date.
pub fn format_naive_date_locale(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(DISPLAY_FORMAT, DISPLAY_LOCALE)
        .to_string()
}
