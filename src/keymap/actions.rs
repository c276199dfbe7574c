//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use crate::controller::ViewId;
use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation (unified across screens) ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move left (previous column or pane)
    MoveLeft,
    /// Move right (next column or pane)
    MoveRight,
    /// Jump up by a page
    PageUp,
    /// Jump down by a page
    PageDown,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,

    // ============ Selection & Confirmation ============
    /// Confirm selection / submit form (Enter)
    Confirm,
    /// Cancel / close (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
    /// Next screen in the sidebar
    NextView,
    /// Previous screen in the sidebar
    PrevView,
    /// Leave the project workspace
    BackToPersonal,

    // ============ Jump to screen ============
    GoDashboard,
    GoLiterature,
    GoKanban,
    GoIdeas,
    GoTeam,
    GoProjects,

    // ============ Screen-specific actions ============
    /// Search / filter
    Search,
    /// Create new item (idea, note)
    Create,
    /// Upvote the selected idea
    VoteUp,
    /// Downvote the selected idea
    VoteDown,
    /// Move the selected task to the previous column
    MoveTaskLeft,
    /// Move the selected task to the next column
    MoveTaskRight,
    /// Cycle the selected member's role
    CycleRole,
    /// Cycle the active filter (idea canvas category)
    CycleFilter,
    /// Move focus to the next pane
    NextTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Confirm / open",
            Action::Cancel => "Cancel / close",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::NextView => "Next screen",
            Action::PrevView => "Previous screen",
            Action::BackToPersonal => "Back to personal space",
            Action::GoDashboard => "Dashboard",
            Action::GoLiterature => "Literature",
            Action::GoKanban => "Planning board",
            Action::GoIdeas => "Idea canvas",
            Action::GoTeam => "Team hub",
            Action::GoProjects => "Projects",
            Action::Search => "Search",
            Action::Create => "Create new",
            Action::VoteUp => "Upvote",
            Action::VoteDown => "Downvote",
            Action::MoveTaskLeft => "Move task left",
            Action::MoveTaskRight => "Move task right",
            Action::CycleRole => "Change role",
            Action::CycleFilter => "Cycle filter",
            Action::NextTab => "Next pane",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Quit
            | Action::Help
            | Action::NextView
            | Action::PrevView
            | Action::BackToPersonal => "Global",

            Action::GoDashboard
            | Action::GoLiterature
            | Action::GoKanban
            | Action::GoIdeas
            | Action::GoTeam
            | Action::GoProjects => "Screens",

            Action::Search
            | Action::Create
            | Action::VoteUp
            | Action::VoteDown
            | Action::MoveTaskLeft
            | Action::MoveTaskRight
            | Action::CycleRole
            | Action::CycleFilter
            | Action::NextTab => "Actions",
        }
    }

    /// The screen a jump action targets
    pub fn target_view(&self) -> Option<ViewId> {
        match self {
            Action::GoDashboard => Some(ViewId::Dashboard),
            Action::GoLiterature => Some(ViewId::Literature),
            Action::GoKanban => Some(ViewId::Kanban),
            Action::GoIdeas => Some(ViewId::Ideas),
            Action::GoTeam => Some(ViewId::Team),
            Action::GoProjects => Some(ViewId::Projects),
            _ => None,
        }
    }

    /// The jump action for a screen
    pub fn go_to(view: ViewId) -> Action {
        match view {
            ViewId::Dashboard => Action::GoDashboard,
            ViewId::Literature => Action::GoLiterature,
            ViewId::Kanban => Action::GoKanban,
            ViewId::Ideas => Action::GoIdeas,
            ViewId::Team => Action::GoTeam,
            ViewId::Projects => Action::GoProjects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Move up");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::GoTeam.category(), "Screens");
        assert_eq!(Action::VoteUp.category(), "Actions");
    }

    #[test]
    fn test_target_view() {
        assert_eq!(Action::GoKanban.target_view(), Some(ViewId::Kanban));
        assert_eq!(Action::Quit.target_view(), None);
        for view in ViewId::ALL {
            assert_eq!(Action::go_to(view).target_view(), Some(view));
        }
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::BackToPersonal).unwrap();
        assert_eq!(json, "\"back_to_personal\"");
        let action: Action = serde_json::from_str("\"move_task_left\"").unwrap();
        assert_eq!(action, Action::MoveTaskLeft);
    }
}
