//! Planning board: kanban columns with tasks that move between them.

use crate::data::{Board, ResearchRepository, Task};
use crate::keymap::{Action, Keymap};
use crate::screens::common::pane_block;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{center_popup, ListStateExt};
use crate::widgets::ToastMessage;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};
use tracing::info;

pub struct KanbanScreen {
    board: Board,
    focused_column: usize,
    /// One selection per column so each remembers its row.
    column_states: Vec<ListState>,
    /// Card detail popup over the board.
    show_detail: bool,
}

impl KanbanScreen {
    pub fn new(repo: &dyn ResearchRepository) -> Self {
        let board = repo.board();
        let column_states = board
            .columns
            .iter()
            .map(|column| {
                let mut state = ListState::default();
                state.select_first_item(column.tasks.len());
                state
            })
            .collect();
        Self {
            board,
            focused_column: 0,
            column_states,
            show_detail: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// `(column, task)` of the highlighted card.
    pub fn focus(&self) -> Option<(usize, usize)> {
        let task = self.column_states.get(self.focused_column)?.selected()?;
        let len = self.board.columns.get(self.focused_column)?.tasks.len();
        (task < len).then_some((self.focused_column, task))
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let (column, task) = self.focus()?;
        self.board.columns[column].tasks.get(task)
    }

    pub fn is_detail_open(&self) -> bool {
        self.show_detail
    }

    fn move_focus(&mut self, delta: isize) {
        let Some(target) = self.focused_column.checked_add_signed(delta) else {
            return;
        };
        if target < self.board.columns.len() {
            self.focused_column = target;
            let len = self.board.columns[target].tasks.len();
            self.column_states[target].clamp_selection(len);
        }
    }

    fn move_task(&mut self, direction: isize) -> ScreenAction {
        let Some((column, task)) = self.focus() else {
            return ScreenAction::None;
        };
        let Some((target, index)) = self.board.move_task(column, task, direction) else {
            return ScreenAction::None;
        };

        let source_len = self.board.columns[column].tasks.len();
        self.column_states[column].clamp_selection(source_len);
        self.column_states[target].select(Some(index));
        self.focused_column = target;

        let moved = &self.board.columns[target].tasks[index];
        info!(
            "Moved task {} from {} to {}",
            moved.id, self.board.columns[column].id, self.board.columns[target].id
        );
        ScreenAction::Toast(ToastMessage::info(format!(
            "Moved \"{}\" to {}",
            moved.title, self.board.columns[target].title
        )))
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let (Some((column, _)), Some(task)) = (self.focus(), self.selected_task()) else {
            return;
        };
        let t = theme();
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), t.muted_style()),
                Span::styled(value, t.text_style()),
            ])
        };
        let mut lines = vec![
            field("Type", format!("{} {:?}", task.kind.icon(), task.kind)),
            field("Column", self.board.columns[column].title.clone()),
            field(
                "Assignee",
                task.assignee.clone().unwrap_or_else(|| "Unassigned".to_string()),
            ),
            field("Due", task.due_date.clone().unwrap_or_else(|| "-".to_string())),
        ];
        if !task.tags.is_empty() {
            lines.push(Line::from(
                std::iter::once(Span::styled(format!("{:<10}", "Tags"), t.muted_style()))
                    .chain(
                        task.tags
                            .iter()
                            .map(|tag| Span::styled(format!("#{} ", tag), t.tag_style())),
                    )
                    .collect::<Vec<_>>(),
            ));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(task.description.clone(), t.text_style())));

        let popup = center_popup(area, area.width.min(70), area.height.min(14));
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(pane_block(task.title.clone(), true, ctx.workspace)),
            popup,
        );
    }

    fn task_item<'a>(task: &Task) -> ListItem<'a> {
        let t = theme();
        let mut meta = Vec::new();
        if let Some(assignee) = &task.assignee {
            meta.push(Span::styled(format!("@{}  ", assignee), t.muted_style()));
        }
        if let Some(due) = &task.due_date {
            meta.push(Span::styled(format!("due {}", due), t.warning_style()));
        }
        ListItem::new(vec![
            Line::from(vec![
                Span::raw(format!("{} ", task.kind.icon())),
                Span::styled(task.title.clone(), t.text_style()),
            ]),
            Line::from(meta),
            Line::from(
                task.tags
                    .iter()
                    .map(|tag| Span::styled(format!("#{} ", tag), t.tag_style()))
                    .collect::<Vec<_>>(),
            ),
        ])
    }
}

impl Screen for KanbanScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [heading, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Research Planning", t.title_style(ctx.workspace))),
                Line::from(Span::styled(
                    format!("{} tasks across {} columns", self.board.task_count(), self.board.columns.len()),
                    t.muted_style(),
                )),
            ]),
            heading,
        );

        if self.board.columns.is_empty() {
            return Ok(());
        }
        let count = self.board.columns.len() as u32;
        let areas = Layout::horizontal(vec![Constraint::Ratio(1, count); self.board.columns.len()])
            .split(body);

        for (i, (column, state)) in self
            .board
            .columns
            .iter()
            .zip(self.column_states.iter_mut())
            .enumerate()
        {
            let focused = i == self.focused_column;
            let title = format!("{} ({})", column.title, column.tasks.len());
            let items: Vec<ListItem> = column.tasks.iter().map(Self::task_item).collect();
            let mut list = List::new(items).block(pane_block(title, focused, ctx.workspace));
            if focused {
                list = list
                    .highlight_style(t.highlight_style())
                    .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            }
            frame.render_stateful_widget(list, areas[i], state);
        }
        if self.show_detail {
            self.render_detail(frame, body, ctx);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        if self.show_detail {
            if matches!(ctx.action_for(&key), Some(Action::Confirm | Action::Cancel)) {
                self.show_detail = false;
            }
            return Ok(ScreenAction::None);
        }
        let action = match ctx.action_for(&key) {
            Some(Action::Confirm) => {
                self.show_detail = self.selected_task().is_some();
                ScreenAction::None
            }
            Some(Action::MoveLeft) => {
                self.move_focus(-1);
                ScreenAction::None
            }
            Some(Action::MoveRight) => {
                self.move_focus(1);
                ScreenAction::None
            }
            Some(Action::MoveTaskLeft) => self.move_task(-1),
            Some(Action::MoveTaskRight) => self.move_task(1),
            Some(action) => {
                let len = self
                    .board
                    .columns
                    .get(self.focused_column)
                    .map_or(0, |c| c.tasks.len());
                if let Some(state) = self.column_states.get_mut(self.focused_column) {
                    state.navigate(action, len);
                }
                ScreenAction::None
            }
            None => ScreenAction::None,
        };
        Ok(action)
    }

    fn footer(&self, keymap: &Keymap) -> String {
        if self.show_detail {
            return format!(
                "{}/{}: Close",
                keymap.confirm_display(),
                keymap.get_key_display_for_action(Action::Cancel)
            );
        }
        format!(
            "{}: Select | {}: Details | {}/{}: Column | {}/{}: Move task | {}: Help",
            keymap.navigation_display(),
            keymap.confirm_display(),
            keymap.get_key_display_for_action(Action::MoveLeft),
            keymap.get_key_display_for_action(Action::MoveRight),
            keymap.get_key_display_for_action(Action::MoveTaskLeft),
            keymap.get_key_display_for_action(Action::MoveTaskRight),
            keymap.get_key_display_for_action(Action::Help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Workspace;
    use crate::data::Fixtures;
    use crate::screens::screen_trait::test_support::{char_key, key, render_text, send};
    use crossterm::event::KeyCode;

    fn column_ids(screen: &KanbanScreen, column: usize) -> Vec<String> {
        screen.board().columns[column]
            .tasks
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn test_move_task_right_follows_focus() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        assert_eq!(screen.focus(), Some((0, 0)));

        let action = send(&mut screen, &ws, char_key('>'));
        assert!(matches!(action, ScreenAction::Toast(_)));
        assert_eq!(column_ids(&screen, 0), vec!["2"]);
        assert_eq!(column_ids(&screen, 1), vec!["3", "1"]);
        assert_eq!(screen.focus(), Some((1, 1)));
        assert_eq!(screen.selected_task().map(|t| t.id.as_str()), Some("1"));
    }

    #[test]
    fn test_move_task_past_edge_is_noop() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        let before = screen.board().clone();
        assert_eq!(send(&mut screen, &ws, char_key('<')), ScreenAction::None);
        assert_eq!(screen.board(), &before);
    }

    #[test]
    fn test_column_focus_clamps() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        send(&mut screen, &ws, key(KeyCode::Left));
        assert_eq!(screen.focused_column(), 0);
        for _ in 0..10 {
            send(&mut screen, &ws, key(KeyCode::Right));
        }
        assert_eq!(screen.focused_column(), 3);
        assert_eq!(screen.selected_task().map(|t| t.id.as_str()), Some("5"));
    }

    #[test]
    fn test_task_count_is_stable_across_moves() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        let total = screen.board().task_count();
        for c in ['>', '>', '>', '<', '>'] {
            send(&mut screen, &ws, char_key(c));
        }
        assert_eq!(screen.board().task_count(), total);
    }

    #[test]
    fn test_detail_opens_on_confirm_and_blocks_board_keys() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        let title = screen.selected_task().map(|t| t.title.clone()).unwrap();

        send(&mut screen, &ws, key(KeyCode::Enter));
        assert!(screen.is_detail_open());
        let text = render_text(&mut screen, &ws, 160, 30);
        assert!(text.contains(&title));
        assert!(text.contains("Assignee"));

        // Board keys do nothing while the card is open
        let before = screen.board().clone();
        assert_eq!(send(&mut screen, &ws, char_key('>')), ScreenAction::None);
        assert_eq!(screen.board(), &before);

        send(&mut screen, &ws, key(KeyCode::Esc));
        assert!(!screen.is_detail_open());
    }

    #[test]
    fn test_detail_needs_a_selected_card() {
        let mut screen = KanbanScreen::new(&Fixtures {
            board: Board::default(),
            ..Fixtures::sample()
        });
        send(&mut screen, &Workspace::Personal, key(KeyCode::Enter));
        assert!(!screen.is_detail_open());
    }

    #[test]
    fn test_renders_columns() {
        let mut screen = KanbanScreen::new(&Fixtures::sample());
        let text = render_text(&mut screen, &Workspace::Personal, 160, 30);
        assert!(text.contains("Backlog (2)"));
        assert!(text.contains("In Progress (1)"));
        assert!(text.contains("Done (1)"));
    }
}
