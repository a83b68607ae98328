//! Configuration management.
//!
//! Configuration is read from `~/.config/broadsheet/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;
pub mod sources;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;
pub use sources::{FeedsConfig, HttpConfig};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feeds: FeedsConfig,
    pub http: HttpConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

impl Config {
    /// Load configuration from the default path, creating it on first run.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Load from `path`. Missing fields take their default values; a missing
    /// file is created with the commented defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/broadsheet/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("broadsheet").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::info!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

const DEFAULT_CONFIG: &str = r##"# Broadsheet configuration

[feeds]
# Opened on startup: a subreddit name, "<subreddit>/top" for all-time top, or "hn"
default_source = "all"

# Offered for navigation after "all" and "popular"; Hacker News is always last
subreddits = [
    "arabianpost",
    "AskReddit",
    "askscience",
    "aww",
]

listing_limit = 35
comment_limit = 35
ranked_limit = 20

# Gallery images narrower than this are only used when nothing wider exists
min_image_width = 500

[http]
reddit_base_url = "https://api.reddit.com"
hn_base_url = "https://hacker-news.firebaseio.com/v0"
user_agent = "broadsheet/0.1.0"
timeout_secs = 10

# Maximum concurrent requests while building one front page
workers = 10

[colors]
# Named colors (Cyan, DarkGray, ...) or "#RRGGBB" / "#RGB"
masthead = "White"
edition = "Gray"
region_border = "DarkGray"
headline = "White"
selected_headline = "Yellow"
byline = "Gray"
dateline = "DarkGray"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
# Single characters, special keys (Enter, Tab, Up, F1, ...) and modifiers ("Ctrl+c")
quit = ["q", "Ctrl+c"]
next_story = ["j", "Down"]
prev_story = ["k", "Up"]
next_source = ["l", "Right", "Tab"]
prev_source = ["h", "Left", "BackTab"]
toggle_top = ["t"]
refresh = ["r"]
open_story = ["o", "Enter"]
"##;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("Default config should be valid TOML");

        assert_eq!(config.feeds.listing_limit, 35);
        assert_eq!(config.feeds.min_image_width, 500);
        assert_eq!(config.http.workers, 10);
        assert_eq!(config.feeds.subreddits, FeedsConfig::default().subreddits);
        assert_eq!(config.colors.selected_headline, Color::Yellow);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feeds]
default_source = "hn"

[colors]
masthead = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.feeds.default_source, "hn");
        assert_eq!(config.feeds.ranked_limit, 20);
        assert_eq!(config.colors.masthead, Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.region_border, Color::DarkGray);
        assert_eq!(config.http.reddit_base_url, "https://api.reddit.com");
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.feeds.default_source, "all");

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.feeds.subreddits, config.feeds.subreddits);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feeds]\nlisting_limit = \"many\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
