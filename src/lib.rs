//! # APOD Client
//!
//! A small async client for NASA's Astronomy Picture of the Day API, plus the
//! date helpers needed to build queries and display results.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, query values and the [`ApodSource`] trait
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client for api.nasa.gov
//! - **Application Layer** ([`application`]) - Date-aware lookups on top of a source
//! - **Utilities** ([`utils`]) - ISO and locale date formatting
//!
//! ## Quick Start
//!
//! ```no_run
//! use apod_client::prelude::*;
//!
//! # async fn run() -> Result<(), ApodError> {
//! let client = NasaApodClient::new(&ApodConfig::new("DEMO_KEY"))?;
//! let today = client.fetch_day(None).await?;
//! println!("{}: {}", today.date, today.title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The client never reads the environment itself. Build an
//! [`config::ApodConfig`] directly or via [`config::load_from_env`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use config::ApodConfig;
pub use domain::sources::ApodSource;
pub use error::ApodError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ApodService;
    pub use crate::config::ApodConfig;
    pub use crate::domain::entities::{Apod, MediaType};
    pub use crate::domain::query::{ApodQuery, DEFAULT_RECENT_COUNT};
    pub use crate::domain::sources::ApodSource;
    pub use crate::error::ApodError;
    pub use crate::infrastructure::http::NasaApodClient;
}
