//! Key bindings and the key-string grammar used in config files.
//!
//! A key string is zero or more modifiers followed by a key, joined with
//! `+`: `"j"`, `"ctrl+n"`, `"alt+<"`, `"ctrl++"`, `"f1"`, `"shift+tab"`.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A key string resolved to what crossterm reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Whether a terminal key event triggers this binding.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let (code, modifiers) = normalize_key(code, modifiers);
        self.parse()
            .is_ok_and(|parsed| parsed.code == code && parsed.modifiers == modifiers)
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Label shown in footers and help ("Ctrl+N", "↑", "Q").
    ///
    /// Unparseable key strings are shown as written.
    pub fn display(&self) -> String {
        self.parse()
            .map(|parsed| parsed.to_string())
            .unwrap_or_else(|_| self.key.clone())
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Fold terminal-reported key events into the form bindings are written in.
///
/// Terminals report `?`, `<` and friends with SHIFT set, upper-case letters
/// as the upper-case char plus SHIFT, and Shift+Tab as `BackTab` plus SHIFT.
pub fn normalize_key(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::BackTab => (KeyCode::BackTab, modifiers.difference(KeyModifiers::SHIFT)),
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            (KeyCode::Char(c.to_ascii_lowercase()), modifiers | KeyModifiers::SHIFT)
        }
        KeyCode::Char(c) if !c.is_alphabetic() => (code, modifiers.difference(KeyModifiers::SHIFT)),
        _ => (code, modifiers),
    }
}

/// Parse a key string like "ctrl+shift+n" into a [`ParsedKey`].
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    if key == "shift+tab" {
        return Ok(ParsedKey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::NONE,
        });
    }

    // A trailing "+" is the plus key itself ("+", "ctrl++")
    let (prefix, key_name) = match key.strip_suffix('+') {
        Some(rest) if rest.is_empty() || rest.ends_with('+') => (rest.trim_end_matches('+'), "+"),
        _ => match key.rsplit_once('+') {
            Some((prefix, name)) => (prefix, name),
            None => ("", key.as_str()),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(ParsedKey {
        code: parse_key_code(key_name.trim())?,
        modifiers,
    })
}

fn parse_key_code(name: &str) -> Result<KeyCode, String> {
    let code = match name {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        _ => {
            if let Some(n) = name
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
            {
                return Ok(KeyCode::F(n));
            }
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", name)),
            }
        }
    };
    Ok(code)
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, label) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
            (KeyModifiers::SUPER, "Cmd+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(label)?;
            }
        }
        match self.code {
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::PageUp => f.write_str("PgUp"),
            KeyCode::PageDown => f.write_str("PgDn"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::BackTab => f.write_str("Shift+Tab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Delete => f.write_str("Del"),
            KeyCode::Insert => f.write_str("Ins"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(key: &str) -> ParsedKey {
        parse_key_string(key).unwrap()
    }

    #[test]
    fn test_parse_plain_and_modified_keys() {
        assert_eq!(parsed("j").code, KeyCode::Char('j'));
        assert_eq!(parsed("j").modifiers, KeyModifiers::NONE);
        assert_eq!(parsed("down").code, KeyCode::Down);

        let ctrl_n = parsed("ctrl+n");
        assert_eq!(ctrl_n.code, KeyCode::Char('n'));
        assert_eq!(ctrl_n.modifiers, KeyModifiers::CONTROL);

        let multi = parsed("Ctrl+Shift+N");
        assert_eq!(multi.code, KeyCode::Char('n'));
        assert_eq!(multi.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_shift_tab_is_backtab() {
        assert_eq!(parsed("shift+tab").code, KeyCode::BackTab);
        assert_eq!(parsed("shift+tab").modifiers, KeyModifiers::NONE);
        assert_eq!(parsed("backtab"), parsed("shift+tab"));
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parsed("+").code, KeyCode::Char('+'));
        assert_eq!(parsed("+").modifiers, KeyModifiers::NONE);
        assert_eq!(parsed("ctrl++").code, KeyCode::Char('+'));
        assert_eq!(parsed("ctrl++").modifiers, KeyModifiers::CONTROL);
        assert_eq!(parsed("alt+<").code, KeyCode::Char('<'));
    }

    #[test]
    fn test_parse_named_and_function_keys() {
        assert_eq!(parsed("enter").code, KeyCode::Enter);
        assert_eq!(parsed("esc").code, KeyCode::Esc);
        assert_eq!(parsed("space").code, KeyCode::Char(' '));
        assert_eq!(parsed("backspace").code, KeyCode::Backspace);
        assert_eq!(parsed("f1").code, KeyCode::F(1));
        assert_eq!(parsed("f12").code, KeyCode::F(12));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("hyper+k").is_err());
        assert!(parse_key_string("foo").is_err());
    }

    #[test]
    fn test_matches_normalizes_terminal_shift() {
        // Terminals report '?' and Shift+Tab with SHIFT set.
        assert!(KeyBinding::new("?", Action::Help).matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(KeyBinding::new("backtab", Action::PrevView)
            .matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(KeyBinding::new("shift+g", Action::GoToEnd)
            .matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(!KeyBinding::new("g", Action::GoToTop)
            .matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_key_binding_matches() {
        let binding = KeyBinding::new("ctrl+n", Action::MoveDown);
        assert!(binding.matches(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('m'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_display() {
        let display = |key: &str| KeyBinding::new(key, Action::Help).display();
        assert_eq!(display("ctrl+n"), "Ctrl+N");
        assert_eq!(display("up"), "↑");
        assert_eq!(display("ctrl+shift+j"), "Ctrl+Shift+J");
        assert_eq!(display("enter"), "Enter");
        assert_eq!(display("+"), "+");
        assert_eq!(display("backtab"), "Shift+Tab");
        assert_eq!(display("f5"), "F5");
        assert_eq!(display("not-a-key"), "not-a-key");
    }

    #[test]
    fn test_key_binding_description() {
        let binding = KeyBinding::new("j", Action::MoveDown);
        assert_eq!(binding.get_description(), "Move down");

        let custom = KeyBinding {
            description: Some("Next paper".to_string()),
            ..binding
        };
        assert_eq!(custom.get_description(), "Next paper");
    }
}
