//! Project list for the personal workspace. Confirming a card opens the
//! project's team space.

use crate::data::{Project, ProjectStatus, ResearchRepository};
use crate::keymap::{Action, Keymap};
use crate::screens::common::{pane_block, progress_bar};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

pub struct ProjectsScreen {
    projects: Vec<Project>,
    list_state: ListState,
}

impl ProjectsScreen {
    pub fn new(repo: &dyn ResearchRepository) -> Self {
        let projects = repo.projects();
        let mut list_state = ListState::default();
        list_state.select_first_item(projects.len());
        Self {
            projects,
            list_state,
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.list_state.selected().and_then(|i| self.projects.get(i))
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let lines = match self.selected_project() {
            Some(project) => vec![
                Line::from(Span::styled(project.name.clone(), t.title_style(ctx.workspace))),
                Line::from(Span::styled(project.description.clone(), t.text_style())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Progress  ", t.muted_style()),
                    Span::styled(progress_bar(project.progress, 20), t.gauge_style(ctx.workspace)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{} members · {} papers · {}/{} tasks",
                        project.members, project.papers, project.completed_tasks, project.tasks
                    ),
                    t.muted_style(),
                )),
                Line::from(Span::styled(format!("Due {}", project.deadline), t.warning_style())),
            ],
            None => vec![Line::from(Span::styled("No projects yet", t.muted_style()))],
        };
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(pane_block("Overview", false, ctx.workspace)),
            area,
        );
    }
}

impl Screen for ProjectsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

        let items: Vec<ListItem> = self
            .projects
            .iter()
            .map(|project| {
                let status = match project.status {
                    ProjectStatus::Active => Span::styled("active", t.success_style()),
                    ProjectStatus::Planning => Span::styled("planning", t.warning_style()),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(project.name.clone(), t.text_style()),
                        Span::raw("  "),
                        status,
                    ]),
                    Line::from(Span::styled(
                        progress_bar(project.progress, 16),
                        t.gauge_style(ctx.workspace),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(pane_block(
                format!("Projects ({})", self.projects.len()),
                true,
                ctx.workspace,
            ))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
        self.render_detail(frame, detail_area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.action_for(&key) {
            Some(Action::Confirm) => self
                .selected_project()
                .map_or(ScreenAction::None, |p| ScreenAction::SelectProject(p.id.clone())),
            Some(action) => {
                self.list_state.navigate(action, self.projects.len());
                ScreenAction::None
            }
            None => ScreenAction::None,
        })
    }

    fn footer(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Select | {}: Open team space | {}: Help",
            keymap.navigation_display(),
            keymap.confirm_display(),
            keymap.get_key_display_for_action(Action::Help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Workspace;
    use crate::data::Fixtures;
    use crate::screens::screen_trait::test_support::{key, render_text, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_confirm_selects_highlighted_project() {
        let mut screen = ProjectsScreen::new(&Fixtures::sample());
        let ws = Workspace::Personal;
        send(&mut screen, &ws, key(KeyCode::End));
        assert_eq!(
            send(&mut screen, &ws, key(KeyCode::Enter)),
            ScreenAction::SelectProject("4".to_string())
        );
    }

    #[test]
    fn test_empty_repository() {
        let mut screen = ProjectsScreen::new(&Fixtures::default());
        let ws = Workspace::Personal;
        assert_eq!(send(&mut screen, &ws, key(KeyCode::Enter)), ScreenAction::None);
        let text = render_text(&mut screen, &ws, 120, 20);
        assert!(text.contains("No projects yet"));
    }

    #[test]
    fn test_renders_cards_and_overview() {
        let mut screen = ProjectsScreen::new(&Fixtures::sample());
        let text = render_text(&mut screen, &Workspace::Personal, 140, 30);
        assert!(text.contains("Projects (4)"));
        assert!(text.contains("Quantum Computing Research"));
        assert!(text.contains("Due Dec 15, 2024"));
    }
}
