//! Render helpers shared by the screens.

use crate::controller::Workspace;
use crate::styles::theme;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Bordered pane; the focused one is drawn in the workspace accent.
pub fn pane_block<'a>(title: impl Into<String>, focused: bool, workspace: &Workspace) -> Block<'a> {
    let t = theme();
    let border_style = if focused {
        t.border_focused_style(workspace)
    } else {
        t.border_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", title.into()))
        .title_style(t.title_style(workspace))
        .padding(Padding::horizontal(1))
}

/// Text progress bar, e.g. `████░░░░ 50%` for `percent = 50, width = 8`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = width * usize::from(percent) / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

/// Percent for a `done / total` pair, rounded down.
pub fn percent(done: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from((u64::from(done.min(total)) * 100) / u64::from(total)).unwrap_or(100)
}
