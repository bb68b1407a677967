//! Caller-side glue combining date arithmetic with an [`ApodSource`].

use std::sync::Arc;

use crate::domain::entities::Apod;
use crate::domain::sources::ApodSource;
use crate::error::ApodError;
use crate::utils::dates::date_days_ago_from;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::task::JoinSet;
use tracing::debug;

/// Service for common APOD lookups.
///
/// Holds no mutable state; concurrency is the caller's choice, except for
/// [`ApodService::on_dates`] which fans out on purpose.
pub struct ApodService<S: ApodSource> {
    source: Arc<S>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: ApodSource + 'static> ApodService<S> {
    /// Creates a service reading the wall clock.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used for "today".
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    fn today(&self) -> NaiveDate {
        (self.clock)().date_naive()
    }

    /// Today's entry, as decided by the API.
    pub async fn latest(&self) -> Result<Apod, ApodError> {
        self.source.fetch_day(None).await
    }

    pub async fn on(&self, date: NaiveDate) -> Result<Apod, ApodError> {
        self.source.fetch_day(Some(date)).await
    }

    /// Entry for `days` days before today.
    ///
    /// # Errors
    ///
    /// Returns [`ApodError::DateOutOfRange`] before any request is made if the
    /// date is not representable, otherwise whatever the source returns.
    pub async fn days_ago(&self, days: i64) -> Result<Apod, ApodError> {
        let date = date_days_ago_from((self.clock)(), days)?;
        self.source.fetch_day(Some(date)).await
    }

    /// Entries from `start` through `end`, passed through unchecked.
    pub async fn range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Apod>, ApodError> {
        self.source.fetch_range(start, end).await
    }

    /// Entries for the last `days` days, today included.
    ///
    /// `days == 0` returns an empty list without a request.
    pub async fn last_days(&self, days: u32) -> Result<Vec<Apod>, ApodError> {
        if days == 0 {
            return Ok(Vec::new());
        }

        let end = self.today();
        let start = date_days_ago_from((self.clock)(), i64::from(days) - 1)?;
        self.source.fetch_range(start, end).await
    }

    pub async fn recent(&self, count: u32) -> Result<Vec<Apod>, ApodError> {
        self.source.fetch_recent(count).await
    }

    /// Fetches one entry per date concurrently.
    ///
    /// Results come back in the order of `dates`. The first failure observed
    /// is returned and the remaining requests are aborted.
    pub async fn on_dates(&self, dates: &[NaiveDate]) -> Result<Vec<Apod>, ApodError> {
        let mut tasks = JoinSet::new();
        for (idx, &date) in dates.iter().enumerate() {
            let source = Arc::clone(&self.source);
            tasks.spawn(async move { (idx, source.fetch_day(Some(date)).await) });
        }
        debug!("Fetching {} dates concurrently", dates.len());

        let mut slots: Vec<Option<Apod>> = vec![None; dates.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, Ok(apod))) => slots[idx] = Some(apod),
                Ok((_, Err(e))) => return Err(e),
                // Tasks are never aborted before this loop ends, so only a panic lands here.
                Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MediaType;
    use crate::domain::sources::MockApodSource;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn apod(date: NaiveDate) -> Apod {
        Apod {
            date,
            title: format!("Entry {date}"),
            explanation: "Stars.".to_string(),
            url: format!("https://apod.nasa.gov/apod/{date}.jpg"),
            hdurl: None,
            media_type: MediaType::Image,
            copyright: None,
            service_version: None,
        }
    }

    #[tokio::test]
    async fn test_latest_asks_for_default_day() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_day()
            .withf(|date| date.is_none())
            .times(1)
            .returning(|_| Ok(apod(date(2024, 3, 1))));

        let service = ApodService::new(Arc::new(mock_source));
        let result = service.latest().await.unwrap();

        assert_eq!(result.date, date(2024, 3, 1));
    }

    #[tokio::test]
    async fn test_days_ago_crosses_month() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_day()
            .withf(|d| *d == Some(date(2024, 2, 29)))
            .times(1)
            .returning(|d| Ok(apod(d.unwrap())));

        let service = ApodService::new(Arc::new(mock_source)).with_clock(fixed_now);
        let result = service.days_ago(1).await.unwrap();

        assert_eq!(result.date, date(2024, 2, 29));
    }

    #[tokio::test]
    async fn test_days_ago_out_of_range_skips_request() {
        let mut mock_source = MockApodSource::new();
        mock_source.expect_fetch_day().never();

        let service = ApodService::new(Arc::new(mock_source)).with_clock(fixed_now);
        let result = service.days_ago(i64::MAX).await;

        assert!(matches!(result, Err(ApodError::DateOutOfRange { .. })));
    }

    #[tokio::test]
    async fn test_last_days_builds_inclusive_range() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_range()
            .withf(|start, end| *start == date(2024, 2, 28) && *end == date(2024, 3, 1))
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    apod(date(2024, 2, 28)),
                    apod(date(2024, 2, 29)),
                    apod(date(2024, 3, 1)),
                ])
            });

        let service = ApodService::new(Arc::new(mock_source)).with_clock(fixed_now);
        let result = service.last_days(3).await.unwrap();

        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_range_passes_inverted_bounds_through() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_range()
            .withf(|start, end| *start == date(2024, 1, 3) && *end == date(2024, 1, 1))
            .times(1)
            .returning(|_, _| Err(ApodError::Api { status: 400 }));

        let service = ApodService::new(Arc::new(mock_source));
        let result = service.range(date(2024, 1, 3), date(2024, 1, 1)).await;

        assert_eq!(result.unwrap_err().status(), Some(400));
    }

    #[tokio::test]
    async fn test_last_days_zero_makes_no_request() {
        let mut mock_source = MockApodSource::new();
        mock_source.expect_fetch_range().never();

        let service = ApodService::new(Arc::new(mock_source)).with_clock(fixed_now);

        assert!(service.last_days(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_propagates_api_error() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_recent()
            .withf(|count| *count == 12)
            .times(1)
            .returning(|_| Err(ApodError::Api { status: 429 }));

        let service = ApodService::new(Arc::new(mock_source));
        let err = service.recent(12).await.unwrap_err();

        assert_eq!(err.status(), Some(429));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_on_dates_preserves_input_order() {
        let mut mock_source = MockApodSource::new();
        mock_source
            .expect_fetch_day()
            .times(3)
            .returning(|d| Ok(apod(d.unwrap())));

        let service = ApodService::new(Arc::new(mock_source));
        let dates = [date(2024, 3, 10), date(2023, 7, 4), date(2024, 1, 1)];
        let result = service.on_dates(&dates).await.unwrap();

        let returned: Vec<NaiveDate> = result.iter().map(|a| a.date).collect();
        assert_eq!(returned, dates);
    }

    #[tokio::test]
    async fn test_on_dates_returns_failure() {
        let mut mock_source = MockApodSource::new();
        mock_source.expect_fetch_day().returning(|d| {
            if d == Some(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()) {
                Err(ApodError::Api { status: 400 })
            } else {
                Ok(apod(d.unwrap()))
            }
        });

        let service = ApodService::new(Arc::new(mock_source));
        let result = service
            .on_dates(&[date(2024, 3, 10), date(1990, 1, 1)])
            .await;

        assert_eq!(result.unwrap_err().status(), Some(400));
    }

    #[tokio::test]
    async fn test_on_dates_empty() {
        let mock_source = MockApodSource::new();
        let service = ApodService::new(Arc::new(mock_source));

        assert!(service.on_dates(&[]).await.unwrap().is_empty());
    }
}
