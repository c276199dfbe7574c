//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::{center_popup, percent_of};
use indoc::indoc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const ABOUT: &str = indoc! {"
    Personal Space holds your own papers, plans and ideas.
    Open a project from Projects to enter its Team Space.
"};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();

        let popup_area = center_popup(
            area,
            percent_of(area.width, 90).min(100),
            percent_of(area.height, 90).min(50),
        );
        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.emphasis_style());
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [about_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .areas(inner_area);

        frame.render_widget(
            Paragraph::new(ABOUT)
                .style(t.muted_style())
                .wrap(Wrap { trim: true }),
            about_area,
        );

        // Two columns of categories so the list fits on small terminals
        let groups = keymap.grouped_bindings();
        let split = groups.len().div_ceil(2);
        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(bindings_area);

        for (column, chunk) in groups.chunks(split.max(1)).enumerate() {
            let mut lines: Vec<Line> = Vec::new();
            for (category, bindings) in chunk {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!(" {} ", category),
                    t.tag_style().add_modifier(Modifier::BOLD),
                )));
                for binding in bindings {
                    lines.push(Line::from(vec![
                        Span::styled(format!("   {:12}", binding.display()), t.emphasis_style()),
                        Span::styled(binding.get_description().to_string(), t.text_style()),
                    ]));
                }
            }
            frame.render_widget(Paragraph::new(lines), columns[column]);
        }

        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );
    }
}
