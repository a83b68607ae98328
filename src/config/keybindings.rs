//! Key bindings for the terminal front page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub next_story: Vec<String>,
    pub prev_story: Vec<String>,
    pub next_source: Vec<String>,
    pub prev_source: Vec<String>,
    pub toggle_top: Vec<String>,
    pub refresh: Vec<String>,
    pub open_story: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            next_story: keys(&["j", "Down"]),
            prev_story: keys(&["k", "Up"]),
            next_source: keys(&["l", "Right", "Tab"]),
            prev_source: keys(&["h", "Left", "BackTab"]),
            toggle_top: keys(&["t"]),
            refresh: keys(&["r"]),
            open_story: keys(&["o", "Enter"]),
        }
    }
}

impl KeybindingConfig {
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 8] = [
            (self.quit.as_slice(), Action::Quit),
            (self.next_story.as_slice(), Action::NextStory),
            (self.prev_story.as_slice(), Action::PrevStory),
            (self.next_source.as_slice(), Action::NextSource),
            (self.prev_source.as_slice(), Action::PrevSource),
            (self.toggle_top.as_slice(), Action::ToggleTop),
            (self.refresh.as_slice(), Action::Refresh),
            (self.open_story.as_slice(), Action::OpenStory),
        ];

        table
            .iter()
            .find(|(bindings, _)| {
                bindings
                    .iter()
                    .filter_map(|b| parse_key_string(b).ok())
                    .any(|binding| binding.matches(key))
            })
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is implied by uppercase characters, so it may be absent from the
    /// binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse `"j"`, `"Enter"`, `"Ctrl+c"`, `"Shift+Tab"` and the like.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let (prefix, key_part) = match s.rsplit_once('+') {
        Some((prefix, key)) if !key.is_empty() => (Some(prefix), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.into_iter().flat_map(|p| p.split('+')) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let code = match s.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("Unknown key: {}", s)),
        },
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_char() {
        let binding = parse_key_string("t").unwrap();
        assert_eq!(binding.code, KeyCode::Char('t'));
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = parse_key_string("+").unwrap();
        assert_eq!(binding.code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert!(parse_key_string("Hyper+a").is_err());
    }

    #[test]
    fn test_parse_special_and_function_keys() {
        assert_eq!(parse_key_string("BackTab").unwrap().code, KeyCode::BackTab);
        assert_eq!(parse_key_string("F5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("F13").is_err());
        assert!(parse_key_string("Nope").is_err());
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(config.get_action(&press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            config.get_action(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(config.get_action(&press(KeyCode::Char('j'))), Action::NextStory);
        assert_eq!(config.get_action(&press(KeyCode::Tab)), Action::NextSource);
        assert_eq!(config.get_action(&press(KeyCode::Char('t'))), Action::ToggleTop);
        assert_eq!(config.get_action(&press(KeyCode::Enter)), Action::OpenStory);
        assert_eq!(config.get_action(&press(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        let config = KeybindingConfig::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(config.get_action(&key), Action::None);
    }
}
