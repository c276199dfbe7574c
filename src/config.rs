use crate::controller::{TransitionTimings, ViewId};
use crate::data::Fixtures;
use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
    /// How long a workspace switch animates before it takes effect
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// How long the transition overlay lingers after the switch
    #[serde(default = "default_overlay_exit_ms")]
    pub overlay_exit_ms: u64,
    /// Event loop poll interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Ignore screen navigation while a workspace switch is animating
    #[serde(default)]
    pub lock_navigation_during_transition: bool,
    /// Screen shown at startup; unknown names fall back to the dashboard
    #[serde(default = "default_start_view")]
    pub start_view: String,
    /// Optional TOML file replacing the built-in sample data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_path: Option<PathBuf>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_transition_ms() -> u64 {
    1500
}

fn default_overlay_exit_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_start_view() -> String {
    ViewId::Dashboard.as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
            transition_ms: default_transition_ms(),
            overlay_exit_ms: default_overlay_exit_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            lock_navigation_during_transition: false,
            start_view: default_start_view(),
            fixtures_path: None,
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Transition timer durations
    pub fn timings(&self) -> TransitionTimings {
        TransitionTimings {
            transition: Duration::from_millis(self.transition_ms),
            overlay_exit: Duration::from_millis(self.overlay_exit_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }

    pub fn start_view(&self) -> ViewId {
        ViewId::parse_or_default(&self.start_view)
    }

    /// Workspace data: the configured fixtures file, or the built-in sample.
    pub fn load_fixtures(&self) -> Result<Fixtures> {
        match &self.fixtures_path {
            Some(path) => {
                let path = crate::utils::expand_path(&path.to_string_lossy());
                Fixtures::load(&path)
            }
            None => Ok(Fixtures::sample()),
        }
    }
}
