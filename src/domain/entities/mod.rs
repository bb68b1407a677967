//! Core domain entities.
//!
//! - [`Apod`] - One astronomy picture of the day entry
//! - [`MediaType`] - Kind of media the entry links to

pub mod apod;

pub use apod::{Apod, MediaType};
