use std::fmt;

pub const DEFAULT_SUBREDDIT: &str = "all";
pub const HACKER_NEWS_ID: &str = "hn";
pub const HACKER_NEWS_LABEL: &str = "Hacker News";

/// Where a front page is pulled from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Subreddit(String),
    HackerNews,
}

impl Source {
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.eq_ignore_ascii_case(HACKER_NEWS_ID) {
            Source::HackerNews
        } else if id.is_empty() {
            Source::Subreddit(DEFAULT_SUBREDDIT.to_string())
        } else {
            Source::Subreddit(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Source::Subreddit(name) => name,
            Source::HackerNews => HACKER_NEWS_ID,
        }
    }

    /// Human-readable origin label carried on every story.
    pub fn label(&self) -> String {
        match self {
            Source::Subreddit(name) => format!("/r/{}", name),
            Source::HackerNews => HACKER_NEWS_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankMode {
    /// Recency-weighted ranking
    #[default]
    Hot,
    TopAllTime,
}

impl RankMode {
    pub fn toggled(self) -> Self {
        match self {
            RankMode::Hot => RankMode::TopAllTime,
            RankMode::TopAllTime => RankMode::Hot,
        }
    }
}

/// Identifies which upstream feed to fetch. Recomputed on every navigation,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedSelector {
    pub source: Source,
    pub rank_mode: RankMode,
}

impl FeedSelector {
    pub fn new(source: Source, rank_mode: RankMode) -> Self {
        Self { source, rank_mode }
    }

    /// Parse a navigation path such as `rust`, `rust/top`, `#hn` or the empty string.
    pub fn parse(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#').trim_start_matches('/');
        let mut parts = path.split('/');
        let source = Source::from_id(parts.next().unwrap_or_default());
        let rank_mode = match parts.next() {
            Some("top") => RankMode::TopAllTime,
            _ => RankMode::Hot,
        };
        Self { source, rank_mode }
    }

    /// Inverse of [`FeedSelector::parse`].
    pub fn to_path(&self) -> String {
        match self.rank_mode {
            RankMode::Hot => self.source.id().to_string(),
            RankMode::TopAllTime => format!("{}/top", self.source.id()),
        }
    }

    pub fn with_source(&self, source: Source) -> Self {
        Self::new(source, self.rank_mode)
    }

    pub fn with_rank_mode(&self, rank_mode: RankMode) -> Self {
        Self::new(self.source.clone(), rank_mode)
    }

    /// The edition line shown under the masthead.
    pub fn describe(&self) -> String {
        match (&self.source, self.rank_mode) {
            (Source::HackerNews, _) => "You're currently reading the Hacker News top stories.".into(),
            (Source::Subreddit(name), RankMode::Hot) => {
                format!("You're currently reading /r/{}.", name)
            }
            (Source::Subreddit(name), RankMode::TopAllTime) => {
                format!("You're currently reading all-time top posts of /r/{}.", name)
            }
        }
    }
}

impl Default for FeedSelector {
    fn default() -> Self {
        Self::new(
            Source::Subreddit(DEFAULT_SUBREDDIT.to_string()),
            RankMode::Hot,
        )
    }
}

impl fmt::Display for FeedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
