//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
    /// Emacs-style navigation (Ctrl+N/P, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_navigation(),
            KeymapPreset::Vim => vim_navigation(),
            KeymapPreset::Emacs => emacs_navigation(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop), // gg in real vim, but single g works
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("shift+g", Action::GoToEnd),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Emacs-style keyboard bindings (Ctrl+N/P navigation)
fn emacs_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("alt+<", Action::GoToTop),
        KeyBinding::new("alt+>", Action::GoToEnd),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("ctrl+x", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]
}

/// Bindings every preset shares
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        // Global
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("tab", Action::NextView),
        KeyBinding::new("backtab", Action::PrevView),
        KeyBinding::new("b", Action::BackToPersonal),
        // Screens
        KeyBinding::new("1", Action::GoDashboard),
        KeyBinding::new("2", Action::GoLiterature),
        KeyBinding::new("3", Action::GoKanban),
        KeyBinding::new("4", Action::GoIdeas),
        KeyBinding::new("5", Action::GoTeam),
        KeyBinding::new("6", Action::GoProjects),
        // Actions
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("n", Action::Create),
        KeyBinding::new("+", Action::VoteUp),
        KeyBinding::new("-", Action::VoteDown),
        KeyBinding::new("<", Action::MoveTaskLeft),
        KeyBinding::new(">", Action::MoveTaskRight),
        KeyBinding::new("r", Action::CycleRole),
        KeyBinding::new("f", Action::CycleFilter),
        KeyBinding::new("w", Action::NextTab),
    ]
}
