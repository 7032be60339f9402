//! Feed item normalizer
//!
//! Turns raw feed records into `Contributor` models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::entities::{ContributionCounts, Contributor, SocialLink};
use crate::domain::ports::{RawContributionCounts, RawFeedItem};
use crate::error::DomainError;

impl From<RawContributionCounts> for ContributionCounts {
    fn from(raw: RawContributionCounts) -> Self {
        Self {
            news: raw.news,
            videos: raw.videos,
            projects: raw.projects,
            research_papers: raw.research_papers,
            events: raw.events,
        }
    }
}

/// Convert one feed record into a contributor.
///
/// `_username`, `name` and `date_published` are required. Text fields that
/// are absent become empty strings, absent counters become zero. Links keep
/// their feed order; a single malformed link fails the whole record.
pub fn normalize(raw: RawFeedItem) -> Result<Contributor, DomainError> {
    let username = raw
        .username
        .ok_or(DomainError::MissingField("_username"))?;
    let name = raw.name.ok_or(DomainError::MissingField("name"))?;
    let date = raw
        .date_published
        .as_deref()
        .ok_or(DomainError::MissingField("date_published"))
        .and_then(parse_date)?;

    let links = raw
        .links
        .iter()
        .map(|url| SocialLink::classify(url))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Contributor {
        name,
        username,
        bio: raw.content_html.unwrap_or_default(),
        avatar: raw.avatar.unwrap_or_default(),
        date,
        links,
        position: raw.position.unwrap_or_default(),
        affiliation: raw.affiliation.unwrap_or_default(),
        contribution_counts: raw.contribution_counts.into(),
    })
}

/// Parse a publication date.
///
/// Accepts RFC 3339, a naive date-time (taken as UTC) or a bare date (UTC
/// midnight).
fn parse_date(value: &str) -> Result<DateTime<Utc>, DomainError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Some(dt) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt.and_utc());
    }

    Err(DomainError::InvalidDate {
        value: value.to_string(),
    })
}
