//! Application layer services.
//!
//! Services consume the [`crate::domain::sources::ApodSource`] trait and add
//! the date handling callers usually need around it.
//!
//! # Available Services
//!
//! - [`services::apod_service::ApodService`] - Latest, relative-day, range and multi-date lookups

pub mod services;
