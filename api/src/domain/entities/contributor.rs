//! Contributor domain entity
//!
//! A person credited on the site, as published in the contributors feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SocialLink;

/// Username of the placeholder contributor
pub const ANONYMOUS_USERNAME: &str = "anonymous";

/// Avatar path of the placeholder contributor, relative to the feed site root
const ANONYMOUS_AVATAR_PATH: &str = "/static/images/contributors/anonymous.webp";

/// Per-kind counts of content a contributor has published
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCounts {
    pub news: u32,
    pub videos: u32,
    pub projects: u32,
    pub research_papers: u32,
    pub events: u32,
}

/// A contributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub username: String,
    /// HTML biography, may be empty
    pub bio: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
    pub links: Vec<SocialLink>,
    pub position: String,
    pub affiliation: String,
    pub contribution_counts: ContributionCounts,
}

impl Contributor {
    /// The placeholder returned when a username lookup finds nobody.
    ///
    /// `feed_base_url` is the site root the avatar is served from.
    pub fn anonymous(feed_base_url: &str) -> Self {
        Self {
            name: "Anonymous".to_string(),
            username: ANONYMOUS_USERNAME.to_string(),
            bio: String::new(),
            avatar: format!(
                "{}{}",
                feed_base_url.trim_end_matches('/'),
                ANONYMOUS_AVATAR_PATH
            ),
            date: Utc::now(),
            links: Vec::new(),
            position: String::new(),
            affiliation: String::new(),
            contribution_counts: ContributionCounts::default(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.username == ANONYMOUS_USERNAME
    }
}
