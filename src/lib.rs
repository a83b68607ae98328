//! # Broadsheet
//!
//! Reddit and Hacker News, laid out as a newspaper front page.
//!
//! ## Architecture
//!
//! ```text
//! Selector → Fetcher → Normalizer → Edition board → Layout → CLI / TUI
//! ```
//!
//! - [`fetcher`]: HTTP transport behind an async trait
//! - [`normalizer`]: Converts feed payloads into uniform [`Story`](domain::Story) records
//! - [`layout`]: Buckets an ordered story list into fixed page regions
//! - [`tui`]: Terminal front page built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print today's /r/all
//! broadsheet show
//!
//! # All-time top of a subreddit, as JSON
//! broadsheet show askscience --top --json
//!
//! # Hacker News in the terminal UI
//! broadsheet tui hn
//! ```

/// Application context, error types and the edition board.
///
/// The [`EditionBoard`](app::EditionBoard) makes sure the front page always
/// reflects the most recently requested selector.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/broadsheet/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Story`](domain::Story): a normalized front-page story
/// - [`FeedSelector`](domain::FeedSelector): which feed to fetch, and how it is ranked
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for fetching a URL
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Fixed front-page regions and story excerpts.
pub mod layout;

/// Feed normalization: entity decoding, image resolution, comment fallback
/// and the per-source pipelines.
pub mod normalizer;

/// Relative ("2 hrs ago") and masthead date formatting.
pub mod timefmt;

/// Terminal front page.
///
/// Keybindings: j/k move between stories, h/l switch source, t toggles
/// all-time top, r refreshes, o opens the story in a browser, q quits.
pub mod tui;
