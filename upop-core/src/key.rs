//! Keyboard keys as seen by the widgets.
//!
//! Hosts hand the reducers a [`Key`] rather than a raw event. Browser hosts
//! parse the DOM `KeyboardEvent.key` name, terminal hosts convert crossterm key
//! codes (behind the `crossterm` feature).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Simplified key representation.
///
/// Space is `Key::Char(' ')`, matching the DOM where the space bar reports `" "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    Backspace,
    Delete,
    /// Any other named key, kept verbatim.
    Other(String),
}

impl Key {
    /// Parse a DOM key name (`"ArrowDown"`, `"Enter"`, `" "`, `"a"`).
    ///
    /// Never fails: names it does not know become [`Key::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Space" | "Spacebar" => Key::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }

    /// Enter or Space, the keys that toggle a select.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }

    /// Up or Down, the keys that move the highlight.
    pub fn is_vertical_arrow(&self) -> bool {
        matches!(self, Key::Up | Key::Down)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("Enter"),
            Key::Escape => f.write_str("Escape"),
            Key::Up => f.write_str("ArrowUp"),
            Key::Down => f.write_str("ArrowDown"),
            Key::Left => f.write_str("ArrowLeft"),
            Key::Right => f.write_str("ArrowRight"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::Tab => f.write_str("Tab"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::parse(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::parse(&name)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

// Conversion from crossterm types
#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::PageUp => Key::Other("PageUp".to_string()),
            KeyCode::PageDown => Key::Other("PageDown".to_string()),
            KeyCode::F(n) => Key::Other(format!("F{n}")),
            other => Key::Other(format!("{other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dom_names() {
        assert_eq!(Key::parse("ArrowDown"), Key::Down);
        assert_eq!(Key::parse("ArrowUp"), Key::Up);
        assert_eq!(Key::parse(" "), Key::Char(' '));
        assert_eq!(Key::parse("a"), Key::Char('a'));
        assert_eq!(Key::parse("PageDown"), Key::Other("PageDown".to_string()));
    }

    #[test]
    fn test_display_round_trips_dom_names() {
        for name in ["Enter", "Escape", "ArrowUp", "ArrowDown", " ", "x", "F5"] {
            assert_eq!(Key::parse(name).to_string(), name);
        }
    }

    #[test]
    fn test_activation_keys() {
        assert!(Key::parse("Enter").is_activation());
        assert!(Key::parse(" ").is_activation());
        assert!(!Key::parse("a").is_activation());
        assert!(!Key::Down.is_activation());
    }

    #[test]
    fn test_parse_empty_name_is_other() {
        assert_eq!(Key::parse(""), Key::Other(String::new()));
    }
}
