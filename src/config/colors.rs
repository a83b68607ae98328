//! Colors for the terminal front page.

use std::str::FromStr;

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub masthead: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub edition: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub region_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub headline: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selected_headline: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub byline: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub dateline: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            masthead: Color::White,
            edition: Color::Gray,
            region_border: Color::DarkGray,
            headline: Color::White,
            selected_headline: Color::Yellow,
            byline: Color::Gray,
            dateline: Color::DarkGray,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a named color (`Cyan`, `DarkGray`, ...), `#RRGGBB` or `#RGB`.
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let expanded = match s.strip_prefix('#') {
        Some(short) if short.len() == 3 => {
            let doubled: String = short.chars().flat_map(|c| [c, c]).collect();
            format!("#{}", doubled)
        }
        _ => s.to_string(),
    };

    Color::from_str(&expanded).map_err(|_| format!("Unknown color: {}", s))
}
