use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the site publishing the JSON feeds
    pub feed_base_url: String,
    pub port: u16,
    /// Per-request timeout when talking to the feed
    pub feed_timeout: Duration,
    /// Upper bound on `next_url` pages followed per fetch
    pub feed_max_pages: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let feed_base_url = env::var("JSON_FEED_BASE_URL")
            .context("JSON_FEED_BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            feed_base_url,
            port: parse_var("PORT", 8080)?,
            feed_timeout: Duration::from_secs(parse_var("FEED_TIMEOUT_SECS", 10)?),
            feed_max_pages: at_least_one("FEED_MAX_PAGES", parse_var("FEED_MAX_PAGES", 20)?)?,
        })
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

fn at_least_one(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        anyhow::bail!("{} must be at least 1", name);
    }
    Ok(value)
}
