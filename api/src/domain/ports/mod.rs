//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed;

pub use feed::{FeedFetcher, FeedFilter, RawContributionCounts, RawFeedItem};
