//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record how they were called so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{FeedFetcher, FeedFilter, RawFeedItem};
use crate::error::FeedError;

/// Arguments of one `fetch_all` call
pub type FetchCall = (Option<usize>, usize, Vec<FeedFilter>);

// ============================================================================
// In-Memory Feed Fetcher
// ============================================================================

/// A feed fetcher serving a fixed list of items.
///
/// Offset and limit are applied; filters are only recorded.
#[derive(Default)]
pub struct InMemoryFeedFetcher {
    items: Arc<RwLock<Vec<RawFeedItem>>>,
    calls: Arc<RwLock<Vec<FetchCall>>>,
    should_fail: bool,
}

impl InMemoryFeedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Append an item to the feed
    pub fn with_item(self, item: RawFeedItem) -> Self {
        self.items.write().unwrap().push(item);
        self
    }

    /// All `fetch_all` calls seen so far
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedFetcher for InMemoryFeedFetcher {
    async fn fetch_all(
        &self,
        limit: Option<usize>,
        offset: usize,
        filters: &[FeedFilter],
    ) -> Result<Vec<RawFeedItem>, FeedError> {
        self.calls
            .write()
            .unwrap()
            .push((limit, offset, filters.to_vec()));

        if self.should_fail {
            return Err(FeedError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        let items = self.items.read().unwrap();
        Ok(items
            .iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
