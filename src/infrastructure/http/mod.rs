//! HTTP access to the remote APOD API.
//!
//! Provides [`NasaApodClient`], the production implementation of
//! [`crate::domain::sources::ApodSource`].

mod nasa_client;

pub use nasa_client::NasaApodClient;
