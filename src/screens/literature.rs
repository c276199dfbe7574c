//! Literature tracker: searchable paper list, a detail pane, and notes.

use crate::data::{filter_papers, Paper, ResearchRepository};
use crate::keymap::{Action, Keymap};
use crate::screens::common::pane_block;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{ListStateExt, TextInput};
use crate::widgets::ToastMessage;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use tracing::debug;

/// Which text field, if any, has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editing {
    None,
    Search,
    Note,
}

pub struct LiteratureScreen {
    papers: Vec<Paper>,
    /// Indices into `papers` matching the current query.
    visible: Vec<usize>,
    search: TextInput,
    note: TextInput,
    editing: Editing,
    list_state: ListState,
}

impl LiteratureScreen {
    pub fn new(repo: &dyn ResearchRepository) -> Self {
        let papers = repo.papers();
        let visible = (0..papers.len()).collect::<Vec<_>>();
        let mut list_state = ListState::default();
        list_state.select_first_item(visible.len());
        Self {
            papers,
            visible,
            search: TextInput::new(),
            note: TextInput::new(),
            editing: Editing::None,
            list_state,
        }
    }

    /// Papers matching the current search, in list order.
    pub fn visible_papers(&self) -> Vec<&Paper> {
        self.visible.iter().map(|&i| &self.papers[i]).collect()
    }

    pub fn selected_paper(&self) -> Option<&Paper> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i))
            .map(|&i| &self.papers[i])
    }

    fn refilter(&mut self) {
        self.visible = filter_papers(&self.papers, self.search.text());
        self.list_state.clamp_selection(self.visible.len());
        debug!(
            "Literature search {:?}: {} of {} papers",
            self.search.text(),
            self.visible.len(),
            self.papers.len()
        );
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => self.editing = Editing::None,
            KeyCode::Esc => {
                self.editing = Editing::None;
                self.search.clear();
                self.refilter();
            }
            KeyCode::Up | KeyCode::Down => {
                let action = if key.code == KeyCode::Up {
                    Action::MoveUp
                } else {
                    Action::MoveDown
                };
                self.list_state.navigate(action, self.visible.len());
            }
            _ => {
                if self.search.handle_key(key.code, key.modifiers) {
                    self.refilter();
                }
            }
        }
        ScreenAction::None
    }

    fn handle_note_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        match key.code {
            KeyCode::Esc => {
                self.editing = Editing::None;
                self.note.clear();
                ScreenAction::None
            }
            KeyCode::Enter => {
                let timestamp = ctx.now.format("%Y-%m-%d %H:%M").to_string();
                let content = self.note.text().to_string();
                let Some(&index) = self.list_state.selected().and_then(|i| self.visible.get(i))
                else {
                    self.editing = Editing::None;
                    return ScreenAction::None;
                };
                if self.papers[index].add_note(&content, timestamp) {
                    self.note.clear();
                    self.editing = Editing::None;
                    ScreenAction::Toast(ToastMessage::success("Note added"))
                } else {
                    ScreenAction::Toast(ToastMessage::warning("Note is empty"))
                }
            }
            _ => {
                self.note.handle_key(key.code, key.modifiers);
                ScreenAction::None
            }
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let searching = self.editing == Editing::Search;
        frame.render_widget(
            Paragraph::new(self.search.to_line("Search papers, authors, or tags...", searching))
                .block(pane_block("Search", searching, ctx.workspace)),
            search_area,
        );

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&i| {
                let paper = &self.papers[i];
                ListItem::new(vec![
                    Line::from(Span::styled(paper.title.clone(), t.text_style())),
                    Line::from(vec![
                        Span::styled(
                            format!("{} · {} {}  ", paper.authors, paper.journal, paper.year),
                            t.muted_style(),
                        ),
                        Span::styled(paper.status.label(), t.tag_style()),
                    ]),
                ])
            })
            .collect();

        let title = format!("Papers ({}/{})", self.visible.len(), self.papers.len());
        if items.is_empty() {
            frame.render_widget(
                Paragraph::new("No papers match your search")
                    .style(t.muted_style())
                    .block(pane_block(title, !searching, ctx.workspace)),
                list_area,
            );
            return;
        }
        let list = List::new(items)
            .block(pane_block(title, !searching, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let Some(paper) = self.selected_paper() else {
            frame.render_widget(
                Paragraph::new("Select a paper to see its details")
                    .style(t.muted_style())
                    .block(pane_block("Details", false, ctx.workspace)),
                area,
            );
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(paper.title.clone(), t.title_style(ctx.workspace))),
            Line::from(Span::styled(paper.authors.clone(), t.text_style())),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {} citations · {}",
                    paper.journal,
                    paper.year,
                    paper.citations,
                    paper.status.label()
                ),
                t.muted_style(),
            )),
            Line::from(
                paper
                    .tags
                    .iter()
                    .map(|tag| Span::styled(format!("#{} ", tag), t.tag_style()))
                    .collect::<Vec<_>>(),
            ),
            Line::from(""),
        ];
        if !paper.summary.is_empty() {
            lines.push(Line::from(Span::styled("Summary", t.emphasis_style())));
            lines.push(Line::from(paper.summary.clone()));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("Notes ({})", paper.notes.len()),
            t.emphasis_style(),
        )));
        if self.editing == Editing::Note {
            lines.push(self.note.to_line("Write a note...", true));
        }
        for note in &paper.notes {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", note.timestamp), t.muted_style()),
                Span::styled(note.content.clone(), t.text_style()),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(pane_block("Details", self.editing == Editing::Note, ctx.workspace)),
            area,
        );
    }
}

impl Screen for LiteratureScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [list, detail] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        self.render_list(frame, list, ctx);
        self.render_detail(frame, detail, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match self.editing {
            Editing::Search => return Ok(self.handle_search_key(key)),
            Editing::Note => return Ok(self.handle_note_key(key, ctx)),
            Editing::None => {}
        }

        match ctx.action_for(&key) {
            Some(Action::Search) => self.editing = Editing::Search,
            Some(Action::Create) if self.selected_paper().is_some() => {
                self.editing = Editing::Note;
            }
            Some(Action::Cancel) if !self.search.text().is_empty() => {
                self.search.clear();
                self.refilter();
            }
            Some(action) => {
                self.list_state.navigate(action, self.visible.len());
            }
            None => {}
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        self.editing != Editing::None
    }

    fn footer(&self, keymap: &Keymap) -> String {
        match self.editing {
            Editing::Search => "Type to filter | Enter: Keep | Esc: Clear".to_string(),
            Editing::Note => "Enter: Save note | Esc: Discard".to_string(),
            Editing::None => format!(
                "{}: Navigate | {}: Search | {}: Add note | {}: Screens | {}: Help",
                keymap.navigation_display(),
                keymap.get_key_display_for_action(Action::Search),
                keymap.get_key_display_for_action(Action::Create),
                keymap.get_key_display_for_action(Action::NextView),
                keymap.get_key_display_for_action(Action::Help)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Workspace;
    use crate::data::Fixtures;
    use crate::screens::screen_trait::test_support::{char_key, key, render_text, send, type_text};

    fn titles(screen: &LiteratureScreen) -> Vec<String> {
        screen
            .visible_papers()
            .iter()
            .map(|p| p.title.clone())
            .collect()
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut screen = LiteratureScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        assert_eq!(screen.visible_papers().len(), 3);

        send(&mut screen, &ws, char_key('/'));
        assert!(screen.is_input_focused());
        type_text(&mut screen, &ws, "BERT");
        assert_eq!(
            titles(&screen),
            vec!["BERT: Pre-training of Deep Bidirectional Transformers"]
        );
        assert_eq!(
            screen.selected_paper().map(|p| p.id),
            Some(screen.visible_papers()[0].id)
        );

        send(&mut screen, &ws, key(KeyCode::Esc));
        assert!(!screen.is_input_focused());
        assert_eq!(screen.visible_papers().len(), 3);
    }

    #[test]
    fn test_search_with_no_match() {
        let mut screen = LiteratureScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        send(&mut screen, &ws, char_key('/'));
        type_text(&mut screen, &ws, "zzzz");
        assert!(screen.visible_papers().is_empty());
        assert!(screen.selected_paper().is_none());

        let text = render_text(&mut screen, &ws, 120, 30);
        assert!(text.contains("No papers match your search"));
    }

    #[test]
    fn test_add_note_to_selected_paper() {
        let mut screen = LiteratureScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        let before = screen.selected_paper().map_or(0, |p| p.notes.len());

        send(&mut screen, &ws, char_key('n'));
        assert!(screen.is_input_focused());
        type_text(&mut screen, &ws, "  Revisit section 3  ");
        let action = send(&mut screen, &ws, key(KeyCode::Enter));

        assert_eq!(action, ScreenAction::Toast(ToastMessage::success("Note added")));
        let paper = screen.selected_paper().unwrap();
        assert_eq!(paper.notes.len(), before + 1);
        assert_eq!(paper.notes[0].content, "Revisit section 3");
        assert_eq!(paper.notes[0].timestamp, "2024-03-01 09:30");
    }

    #[test]
    fn test_blank_note_rejected() {
        let mut screen = LiteratureScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        let before = screen.selected_paper().map_or(0, |p| p.notes.len());

        send(&mut screen, &ws, char_key('n'));
        type_text(&mut screen, &ws, "   ");
        let action = send(&mut screen, &ws, key(KeyCode::Enter));
        assert_eq!(action, ScreenAction::Toast(ToastMessage::warning("Note is empty")));
        assert_eq!(screen.selected_paper().unwrap().notes.len(), before);
    }

    #[test]
    fn test_detail_pane_shows_selected_paper() {
        let mut screen = LiteratureScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        send(&mut screen, &ws, key(KeyCode::Down));
        let text = render_text(&mut screen, &ws, 160, 40);
        assert!(text.contains("Papers (3/3)"));
        assert!(text.contains("Notes ("));
    }
}
