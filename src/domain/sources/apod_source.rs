//! Source trait for APOD data access.

use crate::domain::entities::Apod;
use crate::error::ApodError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only access to APOD entries.
///
/// Every call performs exactly one request and holds no state between calls,
/// so implementations can be shared across tasks without locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::NasaApodClient`] - api.nasa.gov over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApodSource: Send + Sync {
    /// Fetches a single entry.
    ///
    /// With `date = None` the API returns today's entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApodError::Api`] on a non-success status,
    /// [`ApodError::Transport`] on network failure and
    /// [`ApodError::MalformedResponse`] if the body is not an entry.
    async fn fetch_day(&self, date: Option<NaiveDate>) -> Result<Apod, ApodError>;

    /// Fetches every entry from `start` through `end`, inclusive.
    ///
    /// Bounds are passed through unchecked; the API decides ordering and
    /// rejects inverted ranges.
    ///
    /// # Errors
    ///
    /// Same as [`ApodSource::fetch_day`].
    async fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Apod>, ApodError>;

    /// Fetches `count` entries chosen by the API.
    ///
    /// # Errors
    ///
    /// Same as [`ApodSource::fetch_day`].
    async fn fetch_recent(&self, count: u32) -> Result<Vec<Apod>, ApodError>;
}
