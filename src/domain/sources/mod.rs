//! Source trait definitions for the domain layer.
//!
//! Traits here abstract where APOD entries come from. The concrete HTTP
//! implementation lives in `crate::infrastructure::http`; mock
//! implementations are generated via `mockall` for testing.

pub mod apod_source;

pub use apod_source::ApodSource;

#[cfg(test)]
pub use apod_source::MockApodSource;
