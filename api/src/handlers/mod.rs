//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contributors;

pub use contributors::{get_contributor, list_contributors, list_vips};
