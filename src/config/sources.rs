//! Feed and transport settings.

use serde::Deserialize;

use crate::domain::{FeedSelector, Source};

/// Subreddits offered for navigation, after `all` and `popular`. Taken from
/// classic Reddit's top ribbon.
const DEFAULT_SUBREDDITS: &[&str] = &["arabianpost", "AskReddit", "askscience", "aww"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// Navigation path opened on startup, e.g. `all`, `rust/top`, `hn`
    pub default_source: String,
    pub subreddits: Vec<String>,
    /// Items requested per subreddit listing
    pub listing_limit: usize,
    /// Comments requested when looking for fallback text
    pub comment_limit: usize,
    /// Hacker News stories taken from the top of the ranked list
    pub ranked_limit: usize,
    /// Gallery variants narrower than this are only used as a last resort
    pub min_image_width: u32,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            default_source: "all".to_string(),
            subreddits: DEFAULT_SUBREDDITS.iter().map(|s| s.to_string()).collect(),
            listing_limit: 35,
            comment_limit: 35,
            ranked_limit: 20,
            min_image_width: 500,
        }
    }
}

impl FeedsConfig {
    pub fn default_selector(&self) -> FeedSelector {
        FeedSelector::parse(&self.default_source)
    }

    /// Every navigable source: `all`, `popular`, the configured subreddits,
    /// then Hacker News. Duplicates are skipped.
    pub fn sources(&self) -> Vec<Source> {
        let mut sources: Vec<Source> = Vec::new();
        let names = ["all", "popular"]
            .into_iter()
            .chain(self.subreddits.iter().map(String::as_str));

        for name in names {
            let source = Source::from_id(name);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        if !sources.contains(&Source::HackerNews) {
            sources.push(Source::HackerNews);
        }
        sources
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub reddit_base_url: String,
    pub hn_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Maximum concurrent requests per feed pass
    pub workers: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            reddit_base_url: "https://api.reddit.com".to_string(),
            hn_base_url: "https://hacker-news.firebaseio.com/v0".to_string(),
            user_agent: "broadsheet/0.1.0".to_string(),
            timeout_secs: 10,
            workers: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_order_and_dedup() {
        let feeds = FeedsConfig {
            subreddits: vec!["rust".into(), "all".into(), "hn".into(), "aww".into()],
            ..Default::default()
        };
        let ids: Vec<_> = feeds.sources().iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["all", "popular", "rust", "hn", "aww"]);
    }

    #[test]
    fn test_default_sources() {
        let ids: Vec<_> = FeedsConfig::default()
            .sources()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["all", "popular", "arabianpost", "AskReddit", "askscience", "aww", "hn"]
        );
    }

    #[test]
    fn test_sources_always_end_with_hacker_news() {
        let feeds = FeedsConfig::default();
        assert_eq!(feeds.sources().last(), Some(&Source::HackerNews));
    }

    #[test]
    fn test_default_selector() {
        let feeds = FeedsConfig {
            default_source: "rust/top".into(),
            ..Default::default()
        };
        assert_eq!(feeds.default_selector().to_path(), "rust/top");
    }
}
