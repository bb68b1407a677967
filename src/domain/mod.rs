//! Domain layer: entities, query values and source traits.
//!
//! # Architecture
//!
//! - [`entities`] - Data decoded from the API
//! - [`query`] - Parameters for a single request
//! - [`sources`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP; the trait in [`sources`] is
//! implemented by `crate::infrastructure::http`.

pub mod entities;
pub mod query;
pub mod sources;
