use crate::controller::{navigable_views, ViewId, Workspace};
use crate::keymap::{Action, Keymap};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, StatefulWidget};

/// Screen list on the left. Only the views that route somewhere in the
/// current workspace are offered.
pub struct Sidebar<'a> {
    workspace: &'a Workspace,
    active: ViewId,
    keymap: &'a Keymap,
}

impl<'a> Sidebar<'a> {
    pub const WIDTH: u16 = 24;

    pub fn new(workspace: &'a Workspace, active: ViewId, keymap: &'a Keymap) -> Self {
        Self {
            workspace,
            active,
            keymap,
        }
    }

    /// Sidebar entries in order.
    pub fn items(&self) -> Vec<ViewId> {
        navigable_views(self.workspace)
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let views = self.items();

        let items: Vec<ListItem> = views
            .iter()
            .map(|view| {
                let key = self.keymap.get_key_display_for_action(Action::go_to(*view));
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2} ", key), t.muted_style()),
                    Span::styled(view.title(), t.text_style()),
                ]))
            })
            .collect();

        let section = if self.workspace.is_project_workspace() {
            " Team Space "
        } else {
            " Personal "
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(t.border_style())
            .title(section)
            .title_style(t.title_style(self.workspace))
            .padding(Padding::new(0, 1, 1, 0));

        let mut state = ListState::default();
        state.select(views.iter().position(|v| *v == self.active));

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
