//! Screens of the research workspace.
//!
//! Each screen owns its state and handles both rendering and events. The
//! app never picks a screen directly: it asks the view controller which
//! [`ScreenKind`] the active view routes to and looks it up in [`Screens`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                            │
//! │   controller.current_screen() ──► Option<ScreenKind>  │
//! │                                        │              │
//! │   Screens::get_mut(kind) ◄─────────────┘              │
//! │     render(frame, area, ctx)                          │
//! │     handle_event(event, ctx) -> ScreenAction          │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod common;
pub mod dashboard;
pub mod ideas;
pub mod kanban;
pub mod literature;
pub mod project_dashboard;
pub mod projects;
pub mod screen_trait;
pub mod team_hub;

pub use dashboard::DashboardScreen;
pub use ideas::IdeaCanvasScreen;
pub use kanban::KanbanScreen;
pub use literature::LiteratureScreen;
pub use project_dashboard::ProjectDashboardScreen;
pub use projects::ProjectsScreen;
pub use screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
pub use team_hub::TeamHubScreen;

use crate::controller::{ScreenKind, Workspace};
use crate::data::ResearchRepository;

/// One instance of every screen, loaded for a single workspace.
///
/// Rebuilt whenever a workspace change commits, so screen-local edits do
/// not leak from one space into another.
pub struct Screens {
    dashboard: DashboardScreen,
    project_dashboard: ProjectDashboardScreen,
    literature: LiteratureScreen,
    kanban: KanbanScreen,
    ideas: IdeaCanvasScreen,
    team_hub: TeamHubScreen,
    projects: ProjectsScreen,
}

impl Screens {
    pub fn new(repo: &dyn ResearchRepository, workspace: &Workspace) -> Self {
        let project_id = workspace.current_project_id();
        Self {
            dashboard: DashboardScreen::new(repo),
            project_dashboard: ProjectDashboardScreen::new(repo, project_id),
            literature: LiteratureScreen::new(repo),
            kanban: KanbanScreen::new(repo),
            ideas: IdeaCanvasScreen::new(repo),
            team_hub: TeamHubScreen::new(repo, project_id),
            projects: ProjectsScreen::new(repo),
        }
    }

    pub fn get_mut(&mut self, kind: ScreenKind) -> &mut dyn Screen {
        match kind {
            ScreenKind::Dashboard {
                project_workspace: false,
            } => &mut self.dashboard,
            ScreenKind::Dashboard {
                project_workspace: true,
            } => &mut self.project_dashboard,
            ScreenKind::Literature => &mut self.literature,
            ScreenKind::Kanban => &mut self.kanban,
            ScreenKind::IdeaCanvas => &mut self.ideas,
            ScreenKind::TeamHub => &mut self.team_hub,
            ScreenKind::Projects => &mut self.projects,
        }
    }
}
