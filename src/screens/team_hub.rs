//! Team hub: who is on the team, what they have been doing, and how far
//! the current project has come.

use crate::data::{Activity, Presence, Project, ResearchRepository, TeamMember};
use crate::keymap::Action;
use crate::screens::common::{pane_block, percent};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::ListStateExt;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, List, ListItem, ListState, Paragraph};

pub struct TeamHubScreen {
    members: Vec<TeamMember>,
    activity: Vec<Activity>,
    project: Option<Project>,
    members_state: ListState,
}

impl TeamHubScreen {
    pub fn new(repo: &dyn ResearchRepository, project_id: Option<&str>) -> Self {
        let members = repo.team_members();
        let mut members_state = ListState::default();
        members_state.select_first_item(members.len());
        Self {
            members,
            activity: repo.team_activity(),
            project: project_id.and_then(|id| repo.project(id)),
            members_state,
        }
    }

    pub fn online_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.status == Presence::Online)
            .count()
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let Some(project) = &self.project else {
            frame.render_widget(
                Paragraph::new("No project selected")
                    .style(t.muted_style())
                    .block(pane_block("Project Progress", false, ctx.workspace)),
                area,
            );
            return;
        };
        let done = percent(project.completed_tasks, project.tasks);
        let gauge = Gauge::default()
            .block(pane_block(
                format!("{} · due {}", project.name, project.deadline),
                false,
                ctx.workspace,
            ))
            .gauge_style(t.gauge_style(ctx.workspace))
            .ratio(project.task_ratio())
            .label(format!(
                "{}/{} tasks ({}%)",
                project.completed_tasks, project.tasks, done
            ));
        frame.render_widget(gauge, area);
    }

    fn render_members(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .members
            .iter()
            .map(|member| {
                let presence = match member.status {
                    Presence::Online => t.success_style(),
                    Presence::Away => t.warning_style(),
                    Presence::Offline => t.muted_style(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", member.status.symbol()), presence),
                    Span::styled(format!("{:<16}", member.name), t.text_style()),
                    Span::styled(format!("{:<12}", member.role.label()), t.tag_style()),
                    Span::styled(format!("{} contributions", member.contributions), t.muted_style()),
                ]))
            })
            .collect();
        let title = format!("Team ({} online)", self.online_count());
        let list = List::new(items)
            .block(pane_block(title, true, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.members_state);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .activity
            .iter()
            .map(|entry| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(entry.user.clone(), t.emphasis_style()),
                    Span::styled(format!(" {} ", entry.action), t.text_style()),
                    Span::styled(entry.target.clone(), t.title_style(ctx.workspace)),
                    Span::styled(format!("  {}", entry.time), t.muted_style()),
                ])];
                if let Some(details) = &entry.details {
                    lines.push(Line::from(Span::styled(format!("  {}", details), t.muted_style())));
                }
                ListItem::new(lines)
            })
            .collect();
        frame.render_widget(
            List::new(items).block(pane_block("Recent Activity", false, ctx.workspace)),
            area,
        );
    }
}

impl Screen for TeamHubScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [progress, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        self.render_progress(frame, progress, ctx);

        let [members, activity] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
        self.render_members(frame, members, ctx);
        self.render_activity(frame, activity, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Some(action) = key_press(&event).and_then(|key| ctx.action_for(&key)) {
            if action != Action::Confirm {
                self.members_state.navigate(action, self.members.len());
            }
        }
        Ok(ScreenAction::None)
    }
}
