//! Common CLI utilities shared across all CLI commands.
//!
//! This module provides:
//! - `CliContext`: configuration and workspace data loaded once per command
//! - Output helpers: `print_success`, `print_error`, `print_warning`

use crate::config::Config;
use crate::controller::Workspace;
use crate::data::{Fixtures, ResearchRepository};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Shared context for CLI commands.
pub struct CliContext {
    /// The loaded configuration
    pub config: Config,
    /// Path the configuration was loaded from
    pub config_path: PathBuf,
    /// Workspace data named by the configuration
    pub fixtures: Fixtures,
}

impl CliContext {
    /// Load configuration and workspace data.
    ///
    /// # Arguments
    /// * `config_path` - Configuration file; created with defaults if missing
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = Config::load_or_create(config_path).context("Failed to load configuration")?;
        let fixtures = config
            .load_fixtures()
            .context("Failed to load workspace data")?;
        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
            fixtures,
        })
    }

    /// Workspace for an optional `--project` argument.
    ///
    /// Fails for a project id the workspace data does not know.
    pub fn workspace(&self, project: Option<&str>) -> Result<Workspace> {
        match project {
            None => Ok(Workspace::Personal),
            Some(id) if self.fixtures.project(id).is_some() => Ok(Workspace::project(id)),
            Some(id) => bail!("Unknown project: {}", id),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("\u{26A0}\u{FE0F} {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_config_and_uses_sample_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let ctx = CliContext::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(ctx.fixtures, Fixtures::sample());
    }

    #[test]
    fn test_workspace_validates_project() {
        let dir = TempDir::new().unwrap();
        let ctx = CliContext::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(ctx.workspace(None).unwrap(), Workspace::Personal);
        assert_eq!(ctx.workspace(Some("3")).unwrap(), Workspace::project("3"));
        assert!(ctx.workspace(Some("99")).is_err());
    }
}
