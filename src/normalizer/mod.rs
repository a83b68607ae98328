//! Turns upstream feed payloads into an ordered list of [`Story`] records.
//!
//! One implementation per source family, dispatched on [`Source`]:
//!
//! - [`reddit`]: subreddit hot / all-time-top listings, with image
//!   resolution and comment fallback for posts without self-text
//! - [`hacker_news`]: the Hacker News top-stories list
//!
//! Failures never escape [`FeedNormalizer::normalize_feed`]: a broken item
//! degrades or is dropped, a broken feed yields an empty list.

pub mod comments;
pub mod hacker_news;
pub mod image;
pub mod raw;
pub mod reddit;
pub mod sanitize;

pub use image::resolve_image;
pub use sanitize::sanitize;

use crate::config::Config;
use crate::domain::{FeedSelector, Source, Story};
use crate::fetcher::SharedFetcher;

#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    pub reddit_base_url: String,
    pub hn_base_url: String,
    pub listing_limit: usize,
    pub comment_limit: usize,
    pub ranked_limit: usize,
    pub min_image_width: u32,
    /// Upper bound on in-flight requests within one pass
    pub workers: usize,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for NormalizerOptions {
    fn from(config: &Config) -> Self {
        Self {
            reddit_base_url: config.http.reddit_base_url.trim_end_matches('/').to_string(),
            hn_base_url: config.http.hn_base_url.trim_end_matches('/').to_string(),
            listing_limit: config.feeds.listing_limit,
            comment_limit: config.feeds.comment_limit,
            ranked_limit: config.feeds.ranked_limit,
            min_image_width: config.feeds.min_image_width,
            workers: config.http.workers,
        }
    }
}

#[derive(Clone)]
pub struct FeedNormalizer {
    fetcher: SharedFetcher,
    options: NormalizerOptions,
}

impl FeedNormalizer {
    pub fn new(fetcher: SharedFetcher, options: NormalizerOptions) -> Self {
        Self { fetcher, options }
    }

    /// Fetch and normalize one feed. Output order is the upstream order.
    pub async fn normalize_feed(&self, selector: &FeedSelector) -> Vec<Story> {
        let fetcher = self.fetcher.as_ref();
        let stories = match &selector.source {
            Source::Subreddit(name) => {
                reddit::normalize_subreddit(fetcher, &self.options, name, selector.rank_mode).await
            }
            Source::HackerNews => hacker_news::normalize_top_stories(fetcher, &self.options).await,
        };

        tracing::info!("Normalized {} stories for {}", stories.len(), selector);
        stories
    }
}
