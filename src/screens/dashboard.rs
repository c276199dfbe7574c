//! Personal dashboard: headline numbers, what you are reading, and the
//! projects you are active in.

use crate::data::{Project, ProjectStatus, ReadingProgress, ResearchRepository, Stat};
use crate::keymap::{Action, Keymap};
use crate::screens::common::{pane_block, percent, progress_bar};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

pub struct DashboardScreen {
    stats: Vec<Stat>,
    recent: Vec<ReadingProgress>,
    active_projects: Vec<Project>,
    projects_state: ListState,
}

impl DashboardScreen {
    pub fn new(repo: &dyn ResearchRepository) -> Self {
        let active_projects: Vec<Project> = repo
            .projects()
            .into_iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .collect();
        let mut projects_state = ListState::default();
        projects_state.select_first_item(active_projects.len());
        Self {
            stats: repo.dashboard_stats(),
            recent: repo.recent_reading(),
            active_projects,
            projects_state,
        }
    }

    fn selected_project(&self) -> Option<&Project> {
        self.projects_state
            .selected()
            .and_then(|i| self.active_projects.get(i))
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        if self.stats.is_empty() {
            return;
        }
        let constraints = vec![Constraint::Ratio(1, self.stats.len() as u32); self.stats.len()];
        let cards = Layout::horizontal(constraints).split(area);
        for (stat, card) in self.stats.iter().zip(cards.iter()) {
            let text = vec![
                Line::from(Span::styled(stat.value.clone(), t.title_style(ctx.workspace))),
                Line::from(Span::styled(stat.caption.clone(), t.muted_style())),
            ];
            frame.render_widget(
                Paragraph::new(text).block(pane_block(&stat.label, false, ctx.workspace)),
                *card,
            );
        }
    }

    fn render_recent(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .recent
            .iter()
            .map(|paper| {
                ListItem::new(vec![
                    Line::from(Span::styled(paper.title.clone(), t.text_style())),
                    Line::from(vec![
                        Span::styled(format!("{}  ", paper.authors), t.muted_style()),
                        Span::styled(paper.status.label(), t.tag_style()),
                    ]),
                    Line::from(Span::styled(
                        progress_bar(paper.progress, 20),
                        t.gauge_style(ctx.workspace),
                    )),
                ])
            })
            .collect();
        frame.render_widget(
            List::new(items).block(pane_block("Recent Papers", false, ctx.workspace)),
            area,
        );
    }

    fn render_projects(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .active_projects
            .iter()
            .map(|project| {
                let done = percent(project.completed_tasks, project.tasks);
                ListItem::new(vec![
                    Line::from(Span::styled(project.name.clone(), t.text_style())),
                    Line::from(vec![
                        Span::styled(progress_bar(done, 20), t.gauge_style(ctx.workspace)),
                        Span::styled(
                            format!("  {}/{} tasks", project.completed_tasks, project.tasks),
                            t.muted_style(),
                        ),
                    ]),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(pane_block("Active Projects", true, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.projects_state);
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [heading, stats, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Welcome back", t.title_style(ctx.workspace))),
                Line::from(Span::styled(
                    "Here's your research progress at a glance",
                    t.muted_style(),
                )),
            ]),
            heading,
        );
        self.render_stats(frame, stats, ctx);

        let [recent, projects] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
        self.render_recent(frame, recent, ctx);
        self.render_projects(frame, projects, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::Confirm) => Ok(self
                .selected_project()
                .map_or(ScreenAction::None, |p| ScreenAction::SelectProject(p.id.clone()))),
            Some(action) => {
                self.projects_state
                    .navigate(action, self.active_projects.len());
                Ok(ScreenAction::None)
            }
            None => Ok(ScreenAction::None),
        }
    }

    fn footer(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Select project | {}: Open team space | {}: Screens | {}: Help | {}: Quit",
            keymap.navigation_display(),
            keymap.confirm_display(),
            keymap.get_key_display_for_action(Action::NextView),
            keymap.get_key_display_for_action(Action::Help),
            keymap.quit_display()
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
    fn test_only_active_projects_listed() {
        let screen = DashboardScreen::new(&Fixtures::sample());
        assert!(screen
            .active_projects
            .iter()
            .all(|p| p.status == ProjectStatus::Active));
        assert_eq!(screen.selected_project().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_confirm_opens_selected_project() {
        let mut screen = DashboardScreen::new(&Fixtures::sample());
        let workspace = Workspace::Personal;
        send(&mut screen, &workspace, key(KeyCode::Down));
        assert_eq!(
            send(&mut screen, &workspace, key(KeyCode::Enter)),
            ScreenAction::SelectProject("2".to_string())
        );
    }

    #[test]
    fn test_renders_stats_and_reading() {
        let mut screen = DashboardScreen::new(&Fixtures::sample());
        let text = render_text(&mut screen, &Workspace::Personal, 120, 30);
        assert!(text.contains("Papers Read"));
        assert!(text.contains("127"));
        assert!(text.contains("Deep Learning in Medical Imaging"));
        assert!(text.contains("8/12 tasks"));
    }
}
