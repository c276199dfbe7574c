//! View identities, workspaces, and the view router.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Literature,
    Kanban,
    Ideas,
    Team,
    Projects,
}

impl ViewId {
    /// Every view, in sidebar order.
    pub const ALL: [ViewId; 6] = [
        ViewId::Dashboard,
        ViewId::Literature,
        ViewId::Kanban,
        ViewId::Ideas,
        ViewId::Team,
        ViewId::Projects,
    ];

    /// Stable identifier used on the command line and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Literature => "literature",
            ViewId::Kanban => "kanban",
            ViewId::Ideas => "ideas",
            ViewId::Team => "team",
            ViewId::Projects => "projects",
        }
    }

    /// Label shown in the sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Literature => "Literature",
            ViewId::Kanban => "Planning",
            ViewId::Ideas => "Idea Canvas",
            ViewId::Team => "Team Hub",
            ViewId::Projects => "Projects",
        }
    }

    /// Parse a view name, falling back to the dashboard for anything unknown.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(ViewId::Dashboard),
            "literature" => Ok(ViewId::Literature),
            "kanban" | "planning" => Ok(ViewId::Kanban),
            "ideas" | "canvas" => Ok(ViewId::Ideas),
            "team" => Ok(ViewId::Team),
            "projects" => Ok(ViewId::Projects),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

/// Which workspace is committed.
///
/// The project id only exists inside the `Project` variant, so a personal
/// workspace can never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Workspace {
    #[default]
    Personal,
    Project { project_id: String },
}

impl Workspace {
    /// Project workspace for the given id.
    pub fn project(project_id: impl Into<String>) -> Self {
        Workspace::Project {
            project_id: project_id.into(),
        }
    }

    pub fn is_project_workspace(&self) -> bool {
        matches!(self, Workspace::Project { .. })
    }

    pub fn current_project_id(&self) -> Option<&str> {
        match self {
            Workspace::Personal => None,
            Workspace::Project { project_id } => Some(project_id),
        }
    }

    /// "Personal Space" or "Team Space".
    pub fn label(&self) -> &'static str {
        match self {
            Workspace::Personal => "Personal Space",
            Workspace::Project { .. } => "Team Space",
        }
    }
}

/// The concrete screen a `(view, workspace)` pair renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Dashboard { project_workspace: bool },
    Literature,
    Kanban,
    IdeaCanvas,
    TeamHub,
    Projects,
}

/// Pick exactly one screen, or none, for the given view and workspace.
///
/// The team hub only exists inside a project and the project list only
/// exists in the personal workspace; the opposite combinations render nothing.
pub fn route(view: ViewId, workspace: &Workspace) -> Option<ScreenKind> {
    let project_workspace = workspace.is_project_workspace();
    match view {
        ViewId::Dashboard => Some(ScreenKind::Dashboard { project_workspace }),
        ViewId::Literature => Some(ScreenKind::Literature),
        ViewId::Kanban => Some(ScreenKind::Kanban),
        ViewId::Ideas => Some(ScreenKind::IdeaCanvas),
        ViewId::Team if project_workspace => Some(ScreenKind::TeamHub),
        ViewId::Team => None,
        ViewId::Projects if project_workspace => None,
        ViewId::Projects => Some(ScreenKind::Projects),
    }
}

/// Views offered in the sidebar for a workspace: those that route somewhere.
pub fn navigable_views(workspace: &Workspace) -> Vec<ViewId> {
    ViewId::ALL
        .into_iter()
        .filter(|view| route(*view, workspace).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_dashboard_is_parameterized_by_workspace() {
        assert_eq!(
            route(ViewId::Dashboard, &Workspace::Personal),
            Some(ScreenKind::Dashboard {
                project_workspace: false
            })
        );
        assert_eq!(
            route(ViewId::Dashboard, &Workspace::project("1")),
            Some(ScreenKind::Dashboard {
                project_workspace: true
            })
        );
    }

    #[test]
    fn test_route_workspace_agnostic_views() {
        for workspace in [Workspace::Personal, Workspace::project("2")] {
            assert_eq!(
                route(ViewId::Literature, &workspace),
                Some(ScreenKind::Literature)
            );
            assert_eq!(route(ViewId::Kanban, &workspace), Some(ScreenKind::Kanban));
            assert_eq!(
                route(ViewId::Ideas, &workspace),
                Some(ScreenKind::IdeaCanvas)
            );
        }
    }

    #[test]
    fn test_route_cross_workspace_views_render_nothing() {
        assert_eq!(route(ViewId::Team, &Workspace::Personal), None);
        assert_eq!(
            route(ViewId::Team, &Workspace::project("p1")),
            Some(ScreenKind::TeamHub)
        );
        assert_eq!(route(ViewId::Projects, &Workspace::project("p1")), None);
        assert_eq!(
            route(ViewId::Projects, &Workspace::Personal),
            Some(ScreenKind::Projects)
        );
    }

    #[test]
    fn test_unknown_view_falls_back_to_dashboard() {
        assert_eq!(ViewId::parse_or_default("settings"), ViewId::Dashboard);
        assert_eq!(ViewId::parse_or_default(""), ViewId::Dashboard);
        assert_eq!(ViewId::parse_or_default("Kanban"), ViewId::Kanban);
        assert!("settings".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_view_names_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn test_workspace_project_id_presence() {
        let personal = Workspace::Personal;
        assert!(!personal.is_project_workspace());
        assert_eq!(personal.current_project_id(), None);

        let project = Workspace::project("p1");
        assert!(project.is_project_workspace());
        assert_eq!(project.current_project_id(), Some("p1"));
    }

    #[test]
    fn test_navigable_views_per_workspace() {
        assert_eq!(
            navigable_views(&Workspace::Personal),
            vec![
                ViewId::Dashboard,
                ViewId::Literature,
                ViewId::Kanban,
                ViewId::Ideas,
                ViewId::Projects
            ]
        );
        assert_eq!(
            navigable_views(&Workspace::project("1")),
            vec![
                ViewId::Dashboard,
                ViewId::Literature,
                ViewId::Kanban,
                ViewId::Ideas,
                ViewId::Team
            ]
        );
    }
}
