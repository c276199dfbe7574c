//! Command-line interface.
//!
//! Without a subcommand the binary launches the TUI; the subcommands answer
//! routing questions and manage files without touching the terminal.

mod common;
pub mod completions;

pub use common::*;

use crate::config::Config;
use crate::controller::{navigable_views, route, ScreenKind, ViewId, Workspace};
use crate::data::{Fixtures, ResearchRepository};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// A research workspace in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "researchmate",
    version,
    about = "A research workspace in the terminal: papers, plans, ideas and team projects",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open at startup (dashboard, literature, kanban, ideas, team, projects)
    #[arg(long, value_name = "VIEW")]
    pub start_view: Option<String>,

    /// Open a project's team space at startup
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,

    /// Color theme: dark, light or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the views reachable in a workspace
    Views {
        /// Project whose team space to inspect (personal space if omitted)
        #[arg(long, value_name = "ID")]
        project: Option<String>,
    },
    /// Show which screen a view routes to
    Route {
        /// View name; unknown names fall back to the dashboard
        view: String,
        /// Project whose team space to route in (personal space if omitted)
        #[arg(long, value_name = "ID")]
        project: Option<String>,
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Configuration file location
    ConfigPath,
    /// Shows logs location and how to view them
    Logs,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from the environment if omitted)
        shell: Option<Shell>,
    },
    /// Manage workspace data files
    Fixtures {
        #[command(subcommand)]
        command: FixturesCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum FixturesCommand {
    /// Write the built-in sample data to a TOML file as a starting point
    Export {
        /// Destination file
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Result of `researchmate route`, also its JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub view: ViewId,
    pub project_id: Option<String>,
    pub screen: Option<ScreenKind>,
}

impl RouteReport {
    pub fn new(view: ViewId, workspace: &Workspace) -> Self {
        Self {
            view,
            project_id: workspace.current_project_id().map(str::to_string),
            screen: route(view, workspace),
        }
    }

    /// One-line human readable form.
    pub fn describe(&self) -> String {
        let space = match &self.project_id {
            Some(id) => format!("project {}", id),
            None => "personal space".to_string(),
        };
        match self.screen {
            Some(screen) => format!("{} in {} -> {}", self.view, space, screen_name(screen)),
            None => format!("{} in {} -> nothing (not available here)", self.view, space),
        }
    }
}

fn screen_name(screen: ScreenKind) -> &'static str {
    match screen {
        ScreenKind::Dashboard {
            project_workspace: false,
        } => "personal dashboard",
        ScreenKind::Dashboard {
            project_workspace: true,
        } => "project dashboard",
        ScreenKind::Literature => "literature tracker",
        ScreenKind::Kanban => "kanban board",
        ScreenKind::IdeaCanvas => "idea canvas",
        ScreenKind::TeamHub => "team hub",
        ScreenKind::Projects => "project list",
    }
}

/// View named on the command line, plus a warning when the name is unknown
/// and the dashboard is used instead. Aliases like `planning` are accepted.
pub fn resolve_view(name: &str) -> (ViewId, Option<String>) {
    match name.parse::<ViewId>() {
        Ok(view) => (view, None),
        Err(_) => {
            let fallback = ViewId::default();
            (
                fallback,
                Some(format!("Unknown view '{}', using {}", name, fallback)),
            )
        }
    }
}

/// `researchmate views` output, one view per line.
pub fn views_listing(workspace: &Workspace) -> String {
    navigable_views(workspace)
        .into_iter()
        .map(|view| format!("{:<12}{}", view.as_str(), view.title()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Cli {
    /// Config file path: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Project to open at startup, checked against the workspace data.
    pub fn startup_project(&self, fixtures: &Fixtures) -> Result<Option<String>> {
        match &self.project {
            None => Ok(None),
            Some(id) if fixtures.project(id).is_some() => Ok(Some(id.clone())),
            Some(id) => anyhow::bail!("Unknown project: {}", id),
        }
    }

    /// Apply startup flags on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(view) = &self.start_view {
            config.start_view.clone_from(view);
        }
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if self.no_colors || std::env::var_os("NO_COLOR").is_some() {
            config.theme = "nocolor".to_string();
        }
    }

    /// Run a subcommand. Returns false when there is none and the TUI
    /// should start instead.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        let config_path = self.config_path();
        match command {
            Commands::Views { project } => {
                let ctx = CliContext::load(&config_path)?;
                let workspace = ctx.workspace(project.as_deref())?;
                println!("{}", views_listing(&workspace));
            }
            Commands::Route {
                view,
                project,
                json,
            } => {
                let ctx = CliContext::load(&config_path)?;
                let workspace = ctx.workspace(project.as_deref())?;
                let (parsed, warning) = resolve_view(view);
                if let Some(warning) = warning {
                    print_warning(&warning);
                }
                let report = RouteReport::new(parsed, &workspace);
                if *json {
                    let out = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize route")?;
                    println!("{}", out);
                } else {
                    println!("{}", report.describe());
                }
            }
            Commands::ConfigPath => println!("{}", config_path.display()),
            Commands::Logs => {
                let log_file = crate::utils::get_log_dir().join("researchmate.log");
                println!("{}", log_file.display());
                println!("View logs in real-time: tail -f {}", log_file.display());
            }
            Commands::Completions { shell } => completions::generate(*shell)?,
            Commands::Fixtures {
                command: FixturesCommand::Export { path, force },
            } => {
                export_fixtures(path, *force)?;
                print_success(&format!("Sample data written to {}", path.display()));
            }
        }
        Ok(true)
    }
}

/// Write the sample data set to `path`, refusing to clobber without `force`.
pub fn export_fixtures(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    info!("Exporting sample fixtures to {:?}", path);
    Fixtures::sample().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route_with_project() {
        let cli = Cli::try_parse_from(["researchmate", "route", "team", "--project", "2", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Route {
                view,
                project,
                json,
            }) => {
                assert_eq!(view, "team");
                assert_eq!(project.as_deref(), Some("2"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["researchmate", "--project", "1", "--start-view", "kanban"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.project.as_deref(), Some("1"));
        assert!(!cli.execute().unwrap());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from(["researchmate", "--start-view", "ideas", "--theme", "light"])
            .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.start_view(), ViewId::Ideas);
        if std::env::var_os("NO_COLOR").is_none() {
            assert_eq!(config.theme, "light");
        }
    }

    #[test]
    fn test_route_report() {
        let personal = RouteReport::new(ViewId::Team, &Workspace::Personal);
        assert_eq!(personal.screen, None);
        assert_eq!(
            personal.describe(),
            "team in personal space -> nothing (not available here)"
        );

        let project = RouteReport::new(ViewId::Dashboard, &Workspace::project("1"));
        assert_eq!(project.describe(), "dashboard in project 1 -> project dashboard");

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["view"], "dashboard");
        assert_eq!(json["project_id"], "1");
        assert_eq!(json["screen"]["dashboard"]["project_workspace"], true);
    }

    #[test]
    fn test_resolve_view_accepts_aliases() {
        assert_eq!(resolve_view("planning"), (ViewId::Kanban, None));
        assert_eq!(resolve_view("canvas"), (ViewId::Ideas, None));
        assert_eq!(resolve_view(" Kanban"), (ViewId::Kanban, None));

        let (view, warning) = resolve_view("bogus");
        assert_eq!(view, ViewId::Dashboard);
        assert_eq!(warning.as_deref(), Some("Unknown view 'bogus', using dashboard"));
    }

    #[test]
    fn test_startup_project_rejects_unknown_id() {
        let fixtures = Fixtures::sample();
        let none = Cli::try_parse_from(["researchmate"]).unwrap();
        assert_eq!(none.startup_project(&fixtures).unwrap(), None);

        let known = Cli::try_parse_from(["researchmate", "--project", "2"]).unwrap();
        assert_eq!(known.startup_project(&fixtures).unwrap().as_deref(), Some("2"));

        let unknown = Cli::try_parse_from(["researchmate", "--project", "nope"]).unwrap();
        let err = unknown.startup_project(&fixtures).unwrap_err();
        assert_eq!(err.to_string(), "Unknown project: nope");
    }

    #[test]
    fn test_views_listing() {
        let personal = views_listing(&Workspace::Personal);
        assert!(personal.contains("projects"));
        assert!(!personal.contains("team"));
        assert_eq!(personal.lines().count(), 5);

        let project = views_listing(&Workspace::project("1"));
        assert!(project.contains("Team Hub"));
        assert!(!project.contains("projects"));
    }

    #[test]
    fn test_export_fixtures_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.toml");
        export_fixtures(&path, false).unwrap();
        assert!(export_fixtures(&path, false).is_err());
        export_fixtures(&path, true).unwrap();
        assert_eq!(
            crate::data::Fixtures::load(&path).unwrap(),
            crate::data::Fixtures::sample()
        );
    }
}
