//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::ports::{RawContributionCounts, RawFeedItem};

/// A complete raw feed record; links to `https://twitter.com/<username>`
pub fn raw_feed_item(name: &str, username: &str) -> RawFeedItem {
    RawFeedItem {
        name: Some(name.to_string()),
        username: Some(username.to_string()),
        content_html: Some("<p>hi</p>".to_string()),
        avatar: Some("a.png".to_string()),
        date_published: Some("2020-01-01".to_string()),
        links: vec![format!("https://twitter.com/{}", username)],
        position: Some("Eng".to_string()),
        affiliation: Some("Acme".to_string()),
        contribution_counts: RawContributionCounts {
            news: 1,
            videos: 0,
            projects: 2,
            research_papers: 0,
            events: 0,
        },
    }
}

/// The same record as `raw_feed_item`, as it appears on the wire
pub fn raw_feed_item_json(name: &str, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("/contributors/{}", username),
        "name": name,
        "_username": username,
        "_content_html": "<p>hi</p>",
        "avatar": "a.png",
        "date_published": "2020-01-01",
        "_links": [format!("https://twitter.com/{}", username)],
        "_position": "Eng",
        "_affiliation": "Acme",
        "_contribution_counts": {
            "news": 1,
            "videos": 0,
            "projects": 2,
            "research_papers": 0,
            "events": 0
        }
    })
}
