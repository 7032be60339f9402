//! Contributor service
//!
//! Read-side queries over the contributors feed: the full listing, the VIP
//! showcase and lookup by username.

use std::sync::Arc;

use crate::app::normalizer::normalize;
use crate::domain::entities::Contributor;
use crate::domain::ports::{FeedFetcher, FeedFilter};
use crate::error::AppError;

/// Usernames highlighted as VIP contributors
pub const VIP_USERNAMES: [&str; 8] = [
    "ruyman", "andrew", "tom", "rod", "rob", "tony", "james", "gordon",
];

/// Service for querying contributors
pub struct ContributorService<F>
where
    F: FeedFetcher,
{
    feed: Arc<F>,
    feed_base_url: String,
}

impl<F> ContributorService<F>
where
    F: FeedFetcher,
{
    pub fn new(feed: Arc<F>, feed_base_url: String) -> Self {
        Self {
            feed,
            feed_base_url,
        }
    }

    /// List contributors in feed order.
    ///
    /// Fails as a whole if the fetch fails or any record cannot be mapped.
    pub async fn list_all(
        &self,
        limit: Option<usize>,
        offset: usize,
        filters: &[FeedFilter],
    ) -> Result<Vec<Contributor>, AppError> {
        let items = self.feed.fetch_all(limit, offset, filters).await?;

        let contributors = items
            .into_iter()
            .map(normalize)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            count = contributors.len(),
            ?limit,
            offset,
            filters = filters.len(),
            "Listed contributors"
        );

        Ok(contributors)
    }

    /// List VIP contributors sorted by name, ties broken by username
    pub async fn list_vips(&self) -> Result<Vec<Contributor>, AppError> {
        let mut vips: Vec<Contributor> = self
            .list_all(None, 0, &[])
            .await?
            .into_iter()
            .filter(|c| VIP_USERNAMES.contains(&c.username.as_str()))
            .collect();

        vips.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.username.cmp(&b.username))
        });

        Ok(vips)
    }

    /// Find a contributor by exact username.
    ///
    /// Returns the anonymous placeholder when nobody matches.
    pub async fn find_by_username(&self, username: &str) -> Result<Contributor, AppError> {
        let found = self
            .list_all(None, 0, &[])
            .await?
            .into_iter()
            .find(|c| c.username == username);

        Ok(found.unwrap_or_else(|| {
            tracing::debug!("No contributor named {}, using placeholder", username);
            self.anonymous_contributor()
        }))
    }

    /// The placeholder contributor, with its avatar served from the feed site
    pub fn anonymous_contributor(&self) -> Contributor {
        Contributor::anonymous(&self.feed_base_url)
    }
}
