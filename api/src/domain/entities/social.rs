//! Social link domain entity
//!
//! A contributor's profile URL on an external platform, tagged by hostname.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DomainError;

/// Platform a social link belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialTag {
    Twitter,
    Facebook,
    Linkedin,
    Github,
    Stackoverflow,
    Unknown,
}

impl SocialTag {
    /// Look up the platform for a hostname that already had `www.` stripped.
    /// Returns the display name alongside the tag.
    pub fn for_host(host: &str) -> Option<(&'static str, SocialTag)> {
        match host {
            "twitter.com" => Some(("Twitter", SocialTag::Twitter)),
            "x.com" => Some(("X.com", SocialTag::Twitter)),
            "facebook.com" => Some(("Facebook", SocialTag::Facebook)),
            "linkedin.com" => Some(("LinkedIn", SocialTag::Linkedin)),
            "github.com" => Some(("GitHub", SocialTag::Github)),
            "stackoverflow.com" => Some(("StackOverflow", SocialTag::Stackoverflow)),
            _ => None,
        }
    }
}

/// A link to a contributor's profile on some platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Human-readable platform label, or the URL itself when unrecognised
    pub name: String,
    pub tag: SocialTag,
    /// The URL exactly as it appeared in the feed
    pub url: String,
}

impl SocialLink {
    /// Classify a profile URL by its hostname.
    ///
    /// A leading `www.` is ignored. Hosts outside the known set (and URLs
    /// without a host at all) are tagged `unknown` and named after the URL.
    pub fn classify(url: &str) -> Result<Self, DomainError> {
        let parsed = Url::parse(url).map_err(|e| DomainError::MalformedUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let host = parsed.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);

        let (name, tag) = match SocialTag::for_host(host) {
            Some((name, tag)) => (name.to_string(), tag),
            None => (url.to_string(), SocialTag::Unknown),
        };

        Ok(Self {
            name,
            tag,
            url: url.to_string(),
        })
    }
}
