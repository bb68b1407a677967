//! Error type shared by the client, the date utilities and the service layer.

use thiserror::Error;

/// Errors produced by this crate.
///
/// None of these are recovered locally; every failure surfaces to the caller.
#[derive(Debug, Error)]
pub enum ApodError {
    /// The remote API answered with a non-success status.
    ///
    /// 4xx and 5xx are not distinguished and the response body is never read.
    #[error("NASA API error: {status}")]
    Api { status: u16 },

    /// Network-level failure (DNS, refused connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body does not match the expected record shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Relative-day arithmetic left the representable calendar.
    #[error("date {days} days ago is out of range")]
    DateOutOfRange { days: i64 },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ApodError {
    /// HTTP status carried by [`ApodError::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status } => Some(*status),
            _ => None,
        }
    }
}
