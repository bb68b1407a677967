//! Services for the application layer.

pub mod apod_service;

pub use apod_service::ApodService;
