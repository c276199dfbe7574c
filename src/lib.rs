//! ResearchMate - a research workspace in the terminal
//!
//! A personal space for papers, plans and ideas, and per-project team
//! spaces, switched through a timed transition owned by the
//! [`controller::ViewController`].

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod controller;
pub mod data;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use controller::{ViewController, ViewId, Workspace};
pub use data::{Fixtures, ResearchRepository};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
