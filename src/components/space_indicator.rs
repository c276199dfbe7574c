//! Header bar: app title, the current workspace badge, and a way back to
//! the personal space when inside a project.

use crate::controller::Workspace;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct SpaceIndicator<'a> {
    workspace: &'a Workspace,
    project_name: Option<&'a str>,
    back_key: String,
    transitioning: bool,
}

impl<'a> SpaceIndicator<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            project_name: None,
            back_key: "B".to_string(),
            transitioning: false,
        }
    }

    pub fn project_name(mut self, name: Option<&'a str>) -> Self {
        self.project_name = name;
        self
    }

    pub fn back_key(mut self, key: String) -> Self {
        self.back_key = key;
        self
    }

    pub fn transitioning(mut self, transitioning: bool) -> Self {
        self.transitioning = transitioning;
        self
    }

    fn badge(&self) -> Line<'static> {
        let t = theme();
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(t.accent(self.workspace))),
            Span::styled(self.workspace.label(), t.title_style(self.workspace)),
        ];
        if self.workspace.is_project_workspace() {
            let name = self.project_name.unwrap_or("Unknown project");
            spans.push(Span::styled(format!(" · {}", name), t.text_style()));
        }
        if self.transitioning {
            spans.push(Span::styled("  (switching…)", t.muted_style()));
        }
        Line::from(spans)
    }
}

impl Widget for SpaceIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style(self.workspace));
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, center, right] = Layout::horizontal([
            Constraint::Length(40),
            Constraint::Min(0),
            Constraint::Length(28),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("ResearchMate", t.title_style(self.workspace)),
            Span::styled("  Smart Research Assistant", t.muted_style()),
        ]))
        .render(left, buf);

        Paragraph::new(self.badge())
            .alignment(Alignment::Center)
            .render(center, buf);

        if self.workspace.is_project_workspace() {
            Paragraph::new(Line::from(vec![
                Span::styled(self.back_key.clone(), t.emphasis_style()),
                Span::styled(": Back to Personal", t.muted_style()),
            ]))
            .alignment(Alignment::Right)
            .render(right, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::buffer_to_string;

    fn render(indicator: SpaceIndicator) -> String {
        let area = Rect::new(0, 0, 140, 2);
        let mut buf = Buffer::empty(area);
        indicator.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_personal_space_badge() {
        let text = render(SpaceIndicator::new(&Workspace::Personal));
        assert!(text.contains("Personal Space"));
        assert!(!text.contains("Back to Personal"));
    }

    #[test]
    fn test_team_space_badge_with_project() {
        let workspace = Workspace::project("2");
        let text = render(
            SpaceIndicator::new(&workspace)
                .project_name(Some("Grant Proposal - NSF"))
                .back_key("B".to_string()),
        );
        assert!(text.contains("Team Space · Grant Proposal - NSF"));
        assert!(text.contains("B: Back to Personal"));
    }
}
