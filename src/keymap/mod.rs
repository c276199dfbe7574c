//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Active key bindings: a preset plus user overrides from the config file.
///
/// An override replaces every preset binding of the same action, so moving
/// an action to a new key also frees its old key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Action bound to a key event, if any.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Effective bindings, overrides first.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let shadowed = |action: Action| self.overrides.iter().any(|o| o.action == action);
        self.overrides
            .iter()
            .cloned()
            .chain(
                self.preset
                    .bindings()
                    .into_iter()
                    .filter(|binding| !shadowed(binding.action)),
            )
            .collect()
    }

    /// Label of the first key bound to `action` ("Ctrl+N", "Q").
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|binding| binding.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    /// "Up/Down" pair used in list footers.
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    pub fn quit_display(&self) -> String {
        self.get_key_display_for_action(Action::Quit)
    }

    pub fn confirm_display(&self) -> String {
        self.get_key_display_for_action(Action::Confirm)
    }

    /// Footer shown when a screen has nothing more specific to say.
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}: Navigate | {}: Select | {}: Next view | {}: Help | {}: Quit",
            self.navigation_display(),
            self.confirm_display(),
            self.get_key_display_for_action(Action::NextView),
            self.get_key_display_for_action(Action::Help),
            self.quit_display()
        )
    }

    /// Bindings grouped by action category, in help display order.
    pub fn grouped_bindings(&self) -> Vec<(&'static str, Vec<KeyBinding>)> {
        let mut groups: Vec<(&'static str, Vec<KeyBinding>)> = Vec::new();
        for binding in self.all_bindings() {
            let category = binding.action.category();
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, list)) => list.push(binding),
                None => groups.push((category, vec![binding])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        // 'q' should map to Quit in standard preset
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Help)],
        };
        // Override should win
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Help));
    }

    #[test]
    fn test_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        // 'j' should map to MoveDown in vim preset
        let action = keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::MoveDown));
        let action = keymap.get_action(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(action, Some(Action::GoToEnd));
    }

    #[test]
    fn test_terminal_shifted_keys_resolve() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(Action::Help)
        );
        assert_eq!(
            keymap.get_action(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(Action::PrevView)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('+'), KeyModifiers::SHIFT),
            Some(Action::VoteUp)
        );
    }

    #[test]
    fn test_quit_display() {
        let keymap = Keymap::default();
        assert_eq!(keymap.quit_display(), "Q");
    }

    #[test]
    fn test_grouped_bindings_cover_all_categories() {
        let groups = Keymap::default().grouped_bindings();
        let names: Vec<_> = groups.iter().map(|(name, _)| *name).collect();
        for category in ["Navigation", "Global", "Selection", "Screens", "Actions"] {
            assert!(names.contains(&category), "missing {}", category);
        }
    }
}
