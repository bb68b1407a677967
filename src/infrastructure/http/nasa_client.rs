//! HTTP client for api.nasa.gov.

use crate::config::{ApodConfig, mask_api_key};
use crate::domain::entities::Apod;
use crate::domain::query::ApodQuery;
use crate::domain::sources::ApodSource;
use crate::error::ApodError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// APOD client backed by `reqwest`.
///
/// Cheap to clone; clones share the underlying connection pool. The API key is
/// fixed at construction and never changes afterwards.
#[derive(Clone)]
pub struct NasaApodClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl NasaApodClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApodError::InvalidBaseUrl`] if `base_url` does not parse and
    /// [`ApodError::Transport`] if the HTTP client cannot be initialized.
    pub fn new(config: &ApodConfig) -> Result<Self, ApodError> {
        let base_url = Url::parse(&config.base_url)?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        debug!(
            "APOD client ready: {} (key {})",
            base_url,
            mask_api_key(&config.api_key)
        );

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Builds the full request URL for a query, API key first.
    pub fn request_url(&self, query: &ApodQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (name, value) in query.params() {
                pairs.append_pair(name, &value);
            }
        }
        url
    }

    /// Performs one GET and decodes the body as `T`.
    ///
    /// The status is checked before the body is touched; on failure the body
    /// is dropped unread.
    async fn get_json<T: DeserializeOwned>(&self, query: ApodQuery) -> Result<T, ApodError> {
        let url = self.request_url(&query);
        debug!("GET {} {:?}", self.base_url, query.params());

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("APOD request failed with status {} ({:?})", status, query);
            return Err(ApodError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("APOD response did not decode: {}", e);
            ApodError::MalformedResponse(e)
        })
    }
}

#[async_trait]
impl ApodSource for NasaApodClient {
    async fn fetch_day(&self, date: Option<NaiveDate>) -> Result<Apod, ApodError> {
        self.get_json(ApodQuery::day(date)).await
    }

    async fn fetch_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Apod>, ApodError> {
        self.get_json(ApodQuery::range(start, end)).await
    }

    async fn fetch_recent(&self, count: u32) -> Result<Vec<Apod>, ApodError> {
        self.get_json(ApodQuery::recent(count)).await
    }
}
