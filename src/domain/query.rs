//! Query parameters for a single APOD request.

use chrono::NaiveDate;

/// Number of entries requested by [`ApodQuery::Recent`] when the caller has no preference.
pub const DEFAULT_RECENT_COUNT: u32 = 12;

/// Date format the API expects in query parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// What to ask the API for.
///
/// The API key is not part of the query; the client attaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApodQuery {
    /// One entry. `None` lets the API pick its default (today).
    Day { date: Option<NaiveDate> },
    /// Every entry in `start..=end`. Ordering of the bounds is not checked here.
    Range { start: NaiveDate, end: NaiveDate },
    /// `count` entries chosen by the API.
    Recent { count: u32 },
}

impl ApodQuery {
    pub fn day(date: Option<NaiveDate>) -> Self {
        Self::Day { date }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Range { start, end }
    }

    pub fn recent(count: u32) -> Self {
        Self::Recent { count }
    }

    /// Query-string pairs for this request, in the order they are appended.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Day { date: None } => Vec::new(),
            Self::Day { date: Some(date) } => {
                vec![("date", date.format(QUERY_DATE_FORMAT).to_string())]
            }
            Self::Range { start, end } => vec![
                ("start_date", start.format(QUERY_DATE_FORMAT).to_string()),
                ("end_date", end.format(QUERY_DATE_FORMAT).to_string()),
            ],
            Self::Recent { count } => vec![("count", count.to_string())],
        }
    }
}

impl Default for ApodQuery {
    fn default() -> Self {
        Self::Day { date: None }
    }
}
