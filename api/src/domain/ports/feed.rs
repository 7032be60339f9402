//! Feed fetcher port trait
//!
//! Defines the interface for retrieving raw records from the contributors
//! JSON feed, along with the wire shape of those records.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::error::FeedError;

/// Helper to deserialize null as default (empty vec, zero, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One contributor record as published in the feed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeedItem {
    pub name: Option<String>,
    #[serde(rename = "_username")]
    pub username: Option<String>,
    #[serde(rename = "_content_html")]
    pub content_html: Option<String>,
    pub avatar: Option<String>,
    pub date_published: Option<String>,
    #[serde(
        rename = "_links",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub links: Vec<String>,
    #[serde(rename = "_position")]
    pub position: Option<String>,
    #[serde(rename = "_affiliation")]
    pub affiliation: Option<String>,
    #[serde(
        rename = "_contribution_counts",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub contribution_counts: RawContributionCounts,
}

/// Nested counters object of a feed record
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawContributionCounts {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub news: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub videos: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub projects: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub research_papers: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub events: u32,
}

/// Narrows a feed query to items whose `field` matches one of `values`.
///
/// Callers pass these through untouched; only the fetcher interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFilter {
    pub field: String,
    pub values: Vec<String>,
}

impl FeedFilter {
    pub fn new(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            values,
        }
    }

    /// Parse a `;`-separated list such as `_affiliation:Acme;tags:ai,hpc`
    pub fn parse_list(s: &str) -> Result<Vec<FeedFilter>, String> {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl std::str::FromStr for FeedFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, values) = s
            .split_once(':')
            .ok_or_else(|| format!("Filter '{}' must look like field:value[,value]", s))?;

        let field = field.trim();
        if field.is_empty() {
            return Err(format!("Filter '{}' has no field name", s));
        }

        let values: Vec<String> = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect();
        if values.is_empty() {
            return Err(format!("Filter '{}' has no values", s));
        }

        Ok(Self::new(field, values))
    }
}

/// Port trait for the contributors feed
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch raw feed items in feed order.
    ///
    /// `filters` are applied first, then `offset` items are skipped and at
    /// most `limit` are returned (`None` means no limit).
    async fn fetch_all(
        &self,
        limit: Option<usize>,
        offset: usize,
        filters: &[FeedFilter],
    ) -> Result<Vec<RawFeedItem>, FeedError>;
}
