//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod json_feed;

pub use json_feed::JsonFeedClient;
