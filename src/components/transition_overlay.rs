//! Full-screen overlay shown while the workspace switches.

use crate::controller::{Overlay, Workspace};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph};

pub struct TransitionOverlay<'a> {
    overlay: Overlay<'a>,
    project_name: Option<&'a str>,
}

impl<'a> TransitionOverlay<'a> {
    pub fn new(overlay: Overlay<'a>) -> Self {
        Self {
            overlay,
            project_name: None,
        }
    }

    /// Name of the project being entered, if the target is a project.
    pub fn project_name(mut self, name: Option<&'a str>) -> Self {
        self.project_name = name;
        self
    }

    fn target(&self) -> &'a Workspace {
        match self.overlay {
            Overlay::Entering { target, .. } | Overlay::Exiting { target, .. } => target,
        }
    }

    /// "Entering Team Space" / "Entering Personal Space"
    pub fn heading(&self) -> String {
        format!("Entering {}", self.target().label())
    }

    fn subtitle(&self) -> String {
        match (self.target(), self.project_name) {
            (Workspace::Project { .. }, Some(name)) => name.to_string(),
            (Workspace::Project { project_id }, None) => format!("Project {}", project_id),
            (Workspace::Personal, _) => "Your papers, plans and ideas".to_string(),
        }
    }
}

impl Widget for TransitionOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let target = self.target();
        Clear.render(area, buf);

        let (ratio, label, style) = match self.overlay {
            Overlay::Entering { progress, .. } => (
                progress.clamp(0.0, 1.0),
                format!("{:.0}%", progress.clamp(0.0, 1.0) * 100.0),
                t.gauge_style(target),
            ),
            // Exiting: the panel drains as the overlay fades out
            Overlay::Exiting { progress, .. } => (
                1.0 - progress.clamp(0.0, 1.0),
                "Ready".to_string(),
                t.muted_style(),
            ),
        };

        let panel = center_popup(area, 52, 9);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style(target));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [heading, subtitle, _, gauge] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.heading())
            .style(t.title_style(target))
            .alignment(Alignment::Center)
            .render(heading, buf);
        Paragraph::new(self.subtitle())
            .style(t.text_style())
            .alignment(Alignment::Center)
            .render(subtitle, buf);
        Gauge::default()
            .gauge_style(style)
            .ratio(ratio)
            .label(label)
            .render(gauge.inner(Margin::new(2, 0)), buf);
    }
}
