//! JSON feed adapter
//!
//! Implementation of the feed fetcher over the site's JSON Feed endpoint.

pub mod client;

pub use client::JsonFeedClient;
