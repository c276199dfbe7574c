//! Idea canvas: sticky notes plotted at their board positions, with a
//! category filter and a list of what is on screen.

use crate::data::{CanvasIdea, ResearchRepository};
use crate::keymap::{Action, Keymap};
use crate::screens::common::pane_block;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 500.0;

pub struct IdeaCanvasScreen {
    ideas: Vec<CanvasIdea>,
    /// Distinct categories in first-seen order.
    categories: Vec<String>,
    /// Index into `categories`; `None` shows everything.
    filter: Option<usize>,
    list_state: ListState,
}

impl IdeaCanvasScreen {
    pub fn new(repo: &dyn ResearchRepository) -> Self {
        let ideas = repo.canvas_ideas();
        let mut categories: Vec<String> = Vec::new();
        for idea in &ideas {
            if !categories.contains(&idea.category) {
                categories.push(idea.category.clone());
            }
        }
        let mut list_state = ListState::default();
        list_state.select_first_item(ideas.len());
        Self {
            ideas,
            categories,
            filter: None,
            list_state,
        }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter
            .and_then(|i| self.categories.get(i))
            .map(String::as_str)
    }

    pub fn visible_ideas(&self) -> Vec<&CanvasIdea> {
        match self.filter() {
            Some(category) => self.ideas.iter().filter(|i| i.category == category).collect(),
            None => self.ideas.iter().collect(),
        }
    }

    /// None, then each category in turn, then back to None.
    fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None if !self.categories.is_empty() => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            _ => None,
        };
        let len = self.visible_ideas().len();
        self.list_state.clamp_selection(len);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let visible = self.visible_ideas();
        let selected = self.list_state.selected();
        let title = match self.filter() {
            Some(category) => format!("Idea Canvas · {}", category),
            None => "Idea Canvas".to_string(),
        };
        let canvas = Canvas::default()
            .block(pane_block(title, false, ctx.workspace))
            .marker(Marker::Braille)
            .x_bounds([0.0, CANVAS_WIDTH])
            .y_bounds([0.0, CANVAS_HEIGHT])
            .paint(|painter| {
                for (i, idea) in visible.iter().enumerate() {
                    let (x, y) = idea.position;
                    // Stored positions grow downwards; the canvas grows upwards.
                    let y = CANVAS_HEIGHT - f64::from(y);
                    let style = if selected == Some(i) {
                        t.highlight_style()
                    } else {
                        t.text_style()
                    };
                    painter.print(
                        f64::from(x),
                        y,
                        Line::from(vec![
                            Span::styled("▪ ", t.title_style(ctx.workspace)),
                            Span::styled(idea.title.clone(), style),
                        ]),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let [list_area, detail_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).areas(area);

        let items: Vec<ListItem> = self
            .visible_ideas()
            .iter()
            .map(|idea| {
                ListItem::new(Line::from(vec![
                    Span::styled(idea.title.clone(), t.text_style()),
                    Span::styled(format!("  {}", idea.category), t.tag_style()),
                ]))
            })
            .collect();
        let count = items.len();
        let list = List::new(items)
            .block(pane_block(format!("Ideas ({})", count), true, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let description = self
            .list_state
            .selected()
            .and_then(|i| self.visible_ideas().get(i).map(|idea| idea.description.clone()))
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(description)
                .style(t.muted_style())
                .wrap(Wrap { trim: true })
                .block(pane_block("Details", false, ctx.workspace)),
            detail_area,
        );
    }
}

impl Screen for IdeaCanvasScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [canvas, list] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);
        self.render_canvas(frame, canvas, ctx);
        self.render_list(frame, list, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::CycleFilter) => self.cycle_filter(),
            Some(action) => {
                let len = self.visible_ideas().len();
                self.list_state.navigate(action, len);
            }
            None => {}
        }
        Ok(ScreenAction::None)
    }

    fn footer(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Select | {}: Filter ({}) | {}: Help",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::CycleFilter),
            self.filter().unwrap_or("all"),
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

    #[test]
    fn test_filter_cycles_through_categories() {
        let mut screen = IdeaCanvasScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        assert_eq!(screen.filter(), None);

        let mut seen = Vec::new();
        for _ in 0..4 {
            send(&mut screen, &ws, char_key('f'));
            seen.push(screen.filter().map(str::to_string));
        }
        assert_eq!(
            seen,
            vec![
                Some("AI/ML".to_string()),
                Some("Privacy".to_string()),
                Some("Explainability".to_string()),
                Some("Systems".to_string()),
            ]
        );

        send(&mut screen, &ws, char_key('f'));
        assert_eq!(screen.filter(), None);
        assert_eq!(screen.visible_ideas().len(), 4);
    }

    #[test]
    fn test_filter_narrows_and_clamps_selection() {
        let mut screen = IdeaCanvasScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        send(&mut screen, &ws, key(KeyCode::End));
        send(&mut screen, &ws, char_key('f'));

        let visible = screen.visible_ideas();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Multi-modal Learning");
        assert_eq!(screen.list_state.selected(), Some(0));
    }

    #[test]
    fn test_renders_titles() {
        let mut screen = IdeaCanvasScreen::new(&Fixtures::sample());
        let text = render_text(&mut screen, &Workspace::Personal, 160, 40);
        assert!(text.contains("Idea Canvas"));
        assert!(text.contains("Ideas (4)"));
        assert!(text.contains("Interpretable AI"));
    }
}
