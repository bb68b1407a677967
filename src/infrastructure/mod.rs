//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`http`] - `reqwest`-based client for api.nasa.gov

pub mod http;
