//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once by the caller and passed into
//! [`crate::infrastructure::http::NasaApodClient::new`]; nothing in the
//! library reads the environment on its own.
//!
//! ```bash
//! export NASA_API_KEY="your-key"
//! export APOD_TIMEOUT_SECONDS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `NASA_API_KEY` - API key (default: `DEMO_KEY`, heavily rate limited)
//! - `APOD_BASE_URL` - Endpoint (default: `https://api.nasa.gov/planetary/apod`)
//! - `APOD_TIMEOUT_SECONDS` - Per-request timeout (default: 30, range: 1..=300)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Public placeholder key accepted by api.nasa.gov.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const MAX_TIMEOUT_SECONDS: u64 = 300;

/// APOD client configuration.
#[derive(Debug, Clone)]
pub struct ApodConfig {
    pub api_key: String,
    pub base_url: String,
    /// Applied to every request, covering connect through body read.
    pub timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
}

impl ApodConfig {
    /// Creates a configuration with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    /// Overrides the endpoint, mostly useful for pointing at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APOD_TIMEOUT_SECONDS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let api_key = Self::load_api_key();
        let base_url = env::var("APOD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let timeout_seconds = match env::var("APOD_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("APOD_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout_seconds,
            log_level,
            log_format,
        })
    }

    /// Reads `NASA_API_KEY`, falling back to [`DEMO_API_KEY`] when unset or blank.
    fn load_api_key() -> String {
        env::var("NASA_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEMO_API_KEY.to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_key` is empty
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `timeout_seconds` is outside `1..=300`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("NASA_API_KEY must not be empty");
        }

        let url = url::Url::parse(&self.base_url)
            .with_context(|| format!("APOD_BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "APOD_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            anyhow::bail!(
                "APOD_TIMEOUT_SECONDS must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECONDS,
                self.timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Returns whether the rate-limited placeholder key is in use.
    pub fn is_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }

    /// Prints configuration summary (without the full API key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Endpoint: {}", self.base_url);
        if self.is_demo_key() {
            tracing::warn!("  API key: {} (rate limited)", DEMO_API_KEY);
        } else {
            tracing::info!("  API key: {}", mask_api_key(&self.api_key));
        }
        tracing::info!("  Timeout: {}s", self.timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for logging, keeping only the first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
pub(crate) fn mask_api_key(key: &str) -> String {
    match key.char_indices().nth(4) {
        Some((idx, _)) => format!("{}***", &key[..idx]),
        None => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<ApodConfig> {
    let config = ApodConfig::from_env()?;
    config.validate()?;
    Ok(config)
}
