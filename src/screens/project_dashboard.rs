//! Project dashboard: the team space landing screen.
//!
//! Three panes share the screen: the project's ideas (vote, propose), its
//! members (change roles), and recent activity. `NextTab` moves focus
//! between them.

use crate::data::{Activity, Project, ProjectIdea, ResearchRepository, TeamMember, Vote};
use crate::keymap::{Action, Keymap};
use crate::screens::common::{pane_block, progress_bar};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{center_popup, ListStateExt, TextInput};
use crate::widgets::ToastMessage;
use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Ideas,
    Members,
    Activity,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Ideas => Pane::Members,
            Pane::Members => Pane::Activity,
            Pane::Activity => Pane::Ideas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Description,
}

/// The "propose a new idea" popup.
#[derive(Debug, Default)]
struct IdeaForm {
    title: TextInput,
    description: TextInput,
    on_description: bool,
}

impl IdeaForm {
    fn field(&self) -> FormField {
        if self.on_description {
            FormField::Description
        } else {
            FormField::Title
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        if self.on_description {
            &mut self.description
        } else {
            &mut self.title
        }
    }
}

pub struct ProjectDashboardScreen {
    project: Option<Project>,
    ideas: Vec<ProjectIdea>,
    members: Vec<TeamMember>,
    activity: Vec<Activity>,
    pane: Pane,
    ideas_state: ListState,
    members_state: ListState,
    activity_state: ListState,
    form: Option<IdeaForm>,
    next_idea_id: u64,
}

impl ProjectDashboardScreen {
    /// Dashboard for `project_id`; an unknown or missing id falls back to a
    /// generic header.
    pub fn new(repo: &dyn ResearchRepository, project_id: Option<&str>) -> Self {
        let ideas = repo.project_ideas();
        let members = repo.project_members();
        let activity = repo.project_activity();

        let mut ideas_state = ListState::default();
        ideas_state.select_first_item(ideas.len());
        let mut members_state = ListState::default();
        members_state.select_first_item(members.len());
        let mut activity_state = ListState::default();
        activity_state.select_first_item(activity.len());

        let next_idea_id = ideas
            .iter()
            .filter_map(|idea| idea.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            project: project_id.and_then(|id| repo.project(id)),
            ideas,
            members,
            activity,
            pane: Pane::Ideas,
            ideas_state,
            members_state,
            activity_state,
            form: None,
            next_idea_id,
        }
    }

    /// Header title: the project's name, or "Project Dashboard".
    pub fn title(&self) -> &str {
        self.project
            .as_ref()
            .map_or("Project Dashboard", |p| p.name.as_str())
    }

    pub fn ideas(&self) -> &[ProjectIdea] {
        &self.ideas
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    fn vote(&mut self, vote: Vote) -> ScreenAction {
        if let Some(idea) = self
            .ideas_state
            .selected()
            .and_then(|i| self.ideas.get_mut(i))
        {
            idea.votes.toggle(vote);
        }
        ScreenAction::None
    }

    fn cycle_role(&mut self) -> ScreenAction {
        let Some(member) = self
            .members_state
            .selected()
            .and_then(|i| self.members.get_mut(i))
        else {
            return ScreenAction::None;
        };
        member.role = member.role.next();
        info!("Role of {} changed to {}", member.name, member.role.label());
        ScreenAction::Toast(ToastMessage::success(format!(
            "{} is now {} ({})",
            member.name,
            member.role.label(),
            member.role.permissions().join(", ")
        )))
    }

    fn submit_form(&mut self, ctx: &ScreenContext) -> ScreenAction {
        let Some(form) = &self.form else {
            return ScreenAction::None;
        };
        let proposal = ProjectIdea::propose(
            form.title.text(),
            form.description.text(),
            self.next_idea_id.to_string(),
            ctx.now.format("%Y-%m-%d").to_string(),
        );
        match proposal {
            Some(idea) => {
                info!("Idea proposed: {}", idea.title);
                self.next_idea_id += 1;
                self.ideas.insert(0, idea);
                self.ideas_state.select(Some(0));
                self.form = None;
                ScreenAction::Toast(ToastMessage::success("Idea submitted"))
            }
            None => ScreenAction::Toast(ToastMessage::warning(
                "Title and description are required",
            )),
        }
    }

    fn handle_form_key(&mut self, event: &Event, ctx: &ScreenContext) -> ScreenAction {
        let Some(key) = key_press(event) else {
            return ScreenAction::None;
        };
        let Some(form) = self.form.as_mut() else {
            return ScreenAction::None;
        };
        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Tab | KeyCode::BackTab => form.on_description = !form.on_description,
            KeyCode::Enter if form.field() == FormField::Title => form.on_description = true,
            KeyCode::Enter => return self.submit_form(ctx),
            _ => {
                form.focused_input().handle_key(key.code, key.modifiers);
            }
        }
        ScreenAction::None
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let mut lines = vec![Line::from(Span::styled(
            self.title().to_string(),
            t.title_style(ctx.workspace),
        ))];
        if let Some(project) = &self.project {
            lines.push(Line::from(Span::styled(
                project.description.clone(),
                t.muted_style(),
            )));
            lines.push(Line::from(vec![
                Span::styled(progress_bar(project.progress, 24), t.gauge_style(ctx.workspace)),
                Span::styled(
                    format!("   {} members · due {}", project.members, project.deadline),
                    t.muted_style(),
                ),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                "Collaborate on ideas with your team",
                t.muted_style(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_ideas(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .ideas
            .iter()
            .map(|idea| {
                let marker = |vote: Vote| {
                    if idea.votes.user_vote == Some(vote) {
                        t.emphasis_style()
                    } else {
                        t.muted_style()
                    }
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(idea.title.clone(), t.text_style()),
                        Span::styled(format!("  [{}]", idea.status.label()), t.tag_style()),
                    ]),
                    Line::from(Span::styled(idea.description.clone(), t.muted_style())),
                    Line::from(vec![
                        Span::styled(format!("▲ {}", idea.votes.upvotes), marker(Vote::Up)),
                        Span::raw("  "),
                        Span::styled(format!("▼ {}", idea.votes.downvotes), marker(Vote::Down)),
                        Span::styled(format!("  ({:+})", idea.votes.score()), t.text_style()),
                        Span::styled(
                            format!(
                                "  {} comments · {} · {} priority · {}",
                                idea.comments,
                                idea.proposed_by.name,
                                idea.priority.label(),
                                idea.created_at
                            ),
                            t.muted_style(),
                        ),
                    ]),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(pane_block("Project Ideas", self.pane == Pane::Ideas, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.ideas_state);
    }

    fn render_members(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .members
            .iter()
            .map(|member| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", member.status.symbol()), t.success_style()),
                        Span::styled(member.name.clone(), t.text_style()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("  {}", member.role.label()), t.tag_style()),
                        Span::styled(
                            format!(" · {} contributions", member.contributions),
                            t.muted_style(),
                        ),
                    ]),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(pane_block("Members", self.pane == Pane::Members, ctx.workspace))
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.members_state);
    }

    fn render_activity(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let items: Vec<ListItem> = self
            .activity
            .iter()
            .map(|entry| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(entry.user.clone(), t.emphasis_style()),
                    Span::styled(format!(" {} ", entry.action), t.muted_style()),
                    Span::styled(entry.target.clone(), t.text_style()),
                ])];
                if let Some(details) = &entry.details {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", details),
                        t.muted_style(),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.time),
                    t.muted_style(),
                )));
                ListItem::new(lines)
            })
            .collect();
        let list = List::new(items)
            .block(pane_block("Recent Activity", self.pane == Pane::Activity, ctx.workspace))
            .highlight_style(t.highlight_style());
        frame.render_stateful_widget(list, area, &mut self.activity_state);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(form) = &self.form else {
            return;
        };
        let t = theme();
        let popup = center_popup(area, 64, 10);
        frame.render_widget(Clear, popup);

        let block = pane_block("Propose New Idea", true, ctx.workspace);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let on_title = form.field() == FormField::Title;
        let label = |text: &'static str, focused: bool| {
            Line::from(Span::styled(
                text,
                if focused {
                    t.emphasis_style()
                } else {
                    t.muted_style()
                },
            ))
        };
        let lines = vec![
            label("Title", on_title),
            form.title.to_line("Enter idea title", on_title),
            Line::from(""),
            label("Description", !on_title),
            form.description.to_line("Describe your idea", !on_title),
            Line::from(""),
            Line::from(Span::styled(
                "Tab: Switch field | Enter: Submit | Esc: Cancel",
                t.muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

impl Screen for ProjectDashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [header, body] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
        self.render_header(frame, header, ctx);

        let [ideas, side] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
        let [members, activity] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(side);

        self.render_ideas(frame, ideas, ctx);
        self.render_members(frame, members, ctx);
        self.render_activity(frame, activity, ctx);
        self.render_form(frame, area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if self.form.is_some() {
            return Ok(self.handle_form_key(&event, ctx));
        }
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let Some(action) = ctx.action_for(&key) else {
            return Ok(ScreenAction::None);
        };

        let result = match action {
            Action::NextTab => {
                self.pane = self.pane.next();
                ScreenAction::None
            }
            Action::Create => {
                self.pane = Pane::Ideas;
                self.form = Some(IdeaForm::default());
                ScreenAction::None
            }
            Action::VoteUp if self.pane == Pane::Ideas => self.vote(Vote::Up),
            Action::VoteDown if self.pane == Pane::Ideas => self.vote(Vote::Down),
            Action::CycleRole if self.pane == Pane::Members => self.cycle_role(),
            Action::Cancel => ScreenAction::None,
            other => {
                match self.pane {
                    Pane::Ideas => self.ideas_state.navigate(other, self.ideas.len()),
                    Pane::Members => self.members_state.navigate(other, self.members.len()),
                    Pane::Activity => self.activity_state.navigate(other, self.activity.len()),
                };
                ScreenAction::None
            }
        };
        Ok(result)
    }

    fn is_input_focused(&self) -> bool {
        self.form.is_some()
    }

    fn footer(&self, keymap: &Keymap) -> String {
        if self.form.is_some() {
            return "Tab: Switch field | Enter: Submit | Esc: Cancel".to_string();
        }
        let key = |action| keymap.get_key_display_for_action(action);
        let pane_hint = match self.pane {
            Pane::Ideas => format!(
                "{}/{}: Vote | {}: Propose idea",
                key(Action::VoteUp),
                key(Action::VoteDown),
                key(Action::Create)
            ),
            Pane::Members => format!("{}: Change role", key(Action::CycleRole)),
            Pane::Activity => format!("{}: Navigate", keymap.navigation_display()),
        };
        format!(
            "{} | {}: Next pane | {}: Back to Personal | {}: Help",
            pane_hint,
            key(Action::NextTab),
            key(Action::BackToPersonal),
            key(Action::Help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Workspace;
    use crate::data::{Fixtures, IdeaStatus, MemberRole, Priority};
    use crate::screens::screen_trait::test_support::{char_key, key, render_text, send, type_text};

    fn screen() -> (ProjectDashboardScreen, Workspace) {
        (
            ProjectDashboardScreen::new(&Fixtures::sample(), Some("1")),
            Workspace::project("1"),
        )
    }

    #[test]
    fn test_title_falls_back_for_unknown_project() {
        let fixtures = Fixtures::sample();
        assert_eq!(
            ProjectDashboardScreen::new(&fixtures, Some("1")).title(),
            "AI in Healthcare Literature Review"
        );
        assert_eq!(
            ProjectDashboardScreen::new(&fixtures, Some("999")).title(),
            "Project Dashboard"
        );
        assert_eq!(ProjectDashboardScreen::new(&fixtures, None).title(), "Project Dashboard");
    }

    #[test]
    fn test_vote_toggles_on_selected_idea() {
        let (mut screen, ws) = screen();
        let before = screen.ideas()[0].votes;

        send(&mut screen, &ws, char_key('+'));
        assert_eq!(screen.ideas()[0].votes.upvotes, before.upvotes + 1);
        assert_eq!(screen.ideas()[0].votes.user_vote, Some(Vote::Up));

        send(&mut screen, &ws, char_key('-'));
        assert_eq!(screen.ideas()[0].votes.upvotes, before.upvotes);
        assert_eq!(screen.ideas()[0].votes.downvotes, before.downvotes + 1);

        send(&mut screen, &ws, char_key('-'));
        assert_eq!(screen.ideas()[0].votes, before);
    }

    #[test]
    fn test_propose_idea_prepends() {
        let (mut screen, ws) = screen();
        let count = screen.ideas().len();

        send(&mut screen, &ws, char_key('n'));
        assert!(screen.is_input_focused());
        type_text(&mut screen, &ws, "Graph models");
        send(&mut screen, &ws, key(KeyCode::Tab));
        type_text(&mut screen, &ws, "Use GNNs for citations");
        let action = send(&mut screen, &ws, key(KeyCode::Enter));

        assert_eq!(action, ScreenAction::Toast(ToastMessage::success("Idea submitted")));
        assert!(!screen.is_input_focused());
        assert_eq!(screen.ideas().len(), count + 1);
        let idea = &screen.ideas()[0];
        assert_eq!(idea.title, "Graph models");
        assert_eq!(idea.status, IdeaStatus::Proposed);
        assert_eq!(idea.priority, Priority::Medium);
        assert_eq!(idea.created_at, "2024-03-01");
        assert_eq!(idea.id, "4");
    }

    #[test]
    fn test_propose_requires_both_fields() {
        let (mut screen, ws) = screen();
        let count = screen.ideas().len();

        send(&mut screen, &ws, char_key('n'));
        type_text(&mut screen, &ws, "Only a title");
        send(&mut screen, &ws, key(KeyCode::Enter)); // moves to description
        let action = send(&mut screen, &ws, key(KeyCode::Enter));

        assert!(matches!(action, ScreenAction::Toast(ref t) if t.message.contains("required")));
        assert!(screen.is_input_focused());
        assert_eq!(screen.ideas().len(), count);

        send(&mut screen, &ws, key(KeyCode::Esc));
        assert!(!screen.is_input_focused());
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let (mut screen, ws) = screen();
        send(&mut screen, &ws, char_key('n'));
        assert_eq!(send(&mut screen, &ws, char_key('q')), ScreenAction::None);
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_cycle_role_on_members_pane() {
        let (mut screen, ws) = screen();
        let first_role = screen.members()[0].role;

        // Role changes only apply on the members pane
        send(&mut screen, &ws, char_key('r'));
        assert_eq!(screen.members()[0].role, first_role);

        send(&mut screen, &ws, char_key('w'));
        assert_eq!(screen.pane(), Pane::Members);
        let action = send(&mut screen, &ws, char_key('r'));
        let new_role = first_role.next();
        assert_eq!(screen.members()[0].role, new_role);
        match action {
            ScreenAction::Toast(toast) => {
                assert!(toast.message.contains(new_role.label()));
                assert!(toast.message.contains(new_role.permissions()[0]));
            }
            other => panic!("expected toast, got {:?}", other),
        }

        // Five presses bring the role back around
        for _ in 0..MemberRole::ALL.len() - 1 {
            send(&mut screen, &ws, char_key('r'));
        }
        assert_eq!(screen.members()[0].role, first_role);
    }

    #[test]
    fn test_renders_header_and_panes() {
        let (mut screen, ws) = screen();
        let text = render_text(&mut screen, &ws, 140, 40);
        assert!(text.contains("AI in Healthcare Literature Review"));
        assert!(text.contains("Project Ideas"));
        assert!(text.contains("Multi-modal Deep Learning Approach"));
        assert!(text.contains("Members"));
        assert!(text.contains("Recent Activity"));
    }
}
