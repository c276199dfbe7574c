//! Workspace data and the repository screens read it from.
//!
//! Screens copy what they need out of a [`ResearchRepository`] when they are
//! mounted and mutate only their own copy, so nothing written in the UI
//! outlives the session.

pub mod model;
mod sample;

pub use model::{
    filter_papers, Activity, Board, CanvasIdea, Column, IdeaStatus, MemberRole, Paper, PaperNote, Presence,
    Priority, Project, ProjectIdea, ProjectStatus, Proposer, ReadingProgress, ReadingStatus, Stat,
    Task, TaskKind, TeamMember, Vote, Votes,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Read access to the workspace's sample data.
pub trait ResearchRepository {
    fn dashboard_stats(&self) -> Vec<Stat>;
    fn recent_reading(&self) -> Vec<ReadingProgress>;
    fn papers(&self) -> Vec<Paper>;
    fn board(&self) -> Board;
    fn canvas_ideas(&self) -> Vec<CanvasIdea>;
    fn team_members(&self) -> Vec<TeamMember>;
    fn team_activity(&self) -> Vec<Activity>;
    fn project_members(&self) -> Vec<TeamMember>;
    fn project_activity(&self) -> Vec<Activity>;
    fn projects(&self) -> Vec<Project>;
    fn project_ideas(&self) -> Vec<ProjectIdea>;

    /// Look up a project by id.
    fn project(&self, id: &str) -> Option<Project> {
        self.projects().into_iter().find(|p| p.id == id)
    }
}

/// A complete data set, either built in or loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub recent_reading: Vec<ReadingProgress>,
    #[serde(default)]
    pub papers: Vec<Paper>,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub canvas_ideas: Vec<CanvasIdea>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub team_activity: Vec<Activity>,
    #[serde(default)]
    pub project_members: Vec<TeamMember>,
    #[serde(default)]
    pub project_activity: Vec<Activity>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub project_ideas: Vec<ProjectIdea>,
}

impl Fixtures {
    /// The built-in sample workspace.
    pub fn sample() -> Self {
        sample::fixtures()
    }

    /// Load fixtures from a TOML file. Sections missing from the file are empty.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures file: {:?}", path))?;
        let fixtures: Fixtures = toml::from_str(&content)
            .with_context(|| format!("Failed to parse fixtures file: {:?}", path))?;
        info!(
            "Loaded fixtures from {:?}: {} papers, {} projects",
            path,
            fixtures.papers.len(),
            fixtures.projects.len()
        );
        Ok(fixtures)
    }

    /// Write fixtures to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize fixtures")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write fixtures file: {:?}", path))?;
        Ok(())
    }
}

impl ResearchRepository for Fixtures {
    fn dashboard_stats(&self) -> Vec<Stat> {
        self.stats.clone()
    }

    fn recent_reading(&self) -> Vec<ReadingProgress> {
        self.recent_reading.clone()
    }

    fn papers(&self) -> Vec<Paper> {
        self.papers.clone()
    }

    fn board(&self) -> Board {
        self.board.clone()
    }

    fn canvas_ideas(&self) -> Vec<CanvasIdea> {
        self.canvas_ideas.clone()
    }

    fn team_members(&self) -> Vec<TeamMember> {
        self.team_members.clone()
    }

    fn team_activity(&self) -> Vec<Activity> {
        self.team_activity.clone()
    }

    fn project_members(&self) -> Vec<TeamMember> {
        self.project_members.clone()
    }

    fn project_activity(&self) -> Vec<Activity> {
        self.project_activity.clone()
    }

    fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn project_ideas(&self) -> Vec<ProjectIdea> {
        self.project_ideas.clone()
    }
}
