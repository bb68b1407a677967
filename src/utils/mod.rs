//! Utility functions shared by the library and the CLI.
//!
//! - [`dates`] - ISO formatting, relative days and locale display dates

pub mod dates;
