//! JSON feed client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use url::Url;

use crate::domain::ports::{FeedFetcher, FeedFilter, RawFeedItem};
use crate::error::FeedError;

/// Path of the contributors feed, relative to the site root
const CONTRIBUTORS_PATH: &str = "contributors/";

/// Implementation of the feed fetcher over a JSON Feed endpoint
pub struct JsonFeedClient {
    http: Client,
    feed_url: Url,
    max_pages: usize,
}

/// One page of a JSON Feed document
#[derive(Deserialize)]
struct FeedPage {
    #[serde(default)]
    items: Vec<Value>,
    next_url: Option<String>,
}

impl JsonFeedClient {
    pub fn new(base_url: &str, timeout: Duration, max_pages: usize) -> Result<Self, FeedError> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| FeedError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let feed_url = base
            .join(CONTRIBUTORS_PATH)
            .map_err(|e| FeedError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            feed_url,
            max_pages,
        })
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FeedError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| FeedError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(FeedError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn fetch_page(&self, url: &Url) -> Result<FeedPage, FeedError> {
        tracing::debug!("Fetching feed page {}", url);

        let resp = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/feed+json, application/json")
            .send()
            .await?;

        self.handle_response(resp).await
    }
}

/// Whether a raw item satisfies a filter.
///
/// Scalar fields must equal one of the wanted values; array fields must
/// contain one.
fn matches_filter(filter: &FeedFilter, item: &Value) -> bool {
    match item.get(&filter.field) {
        Some(Value::Array(values)) => values.iter().any(|v| value_matches(filter, v)),
        Some(value) => value_matches(filter, value),
        None => false,
    }
}

fn value_matches(filter: &FeedFilter, value: &Value) -> bool {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    filter.values.iter().any(|wanted| *wanted == text)
}

#[async_trait]
impl FeedFetcher for JsonFeedClient {
    async fn fetch_all(
        &self,
        limit: Option<usize>,
        offset: usize,
        filters: &[FeedFilter],
    ) -> Result<Vec<RawFeedItem>, FeedError> {
        let wanted = limit.map(|l| offset.saturating_add(l));
        let mut matched: Vec<Value> = Vec::new();
        let mut next = Some(self.feed_url.clone());
        let mut pages = 0;

        while let Some(url) = next.take() {
            // A pending page past the cap means the result would be partial
            if pages >= self.max_pages {
                tracing::warn!("Feed page cap of {} reached before {}", self.max_pages, url);
                return Err(FeedError::TooManyPages {
                    max_pages: self.max_pages,
                });
            }

            let page = self.fetch_page(&url).await?;
            pages += 1;

            matched.extend(
                page.items
                    .into_iter()
                    .filter(|item| filters.iter().all(|f| matches_filter(f, item))),
            );

            if wanted.is_some_and(|w| matched.len() >= w) {
                break;
            }

            next = page
                .next_url
                .map(|n| url.join(&n))
                .transpose()
                .map_err(|e| FeedError::InvalidUrl(e.to_string()))?;
        }

        tracing::debug!(pages, matched = matched.len(), "Fetched contributors feed");

        matched
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .map(|item| serde_json::from_value(item).map_err(FeedError::from))
            .collect()
    }
}
