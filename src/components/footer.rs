use crate::controller::Workspace;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint bar along the bottom of the screen
pub struct Footer;

impl Footer {
    /// Render `"keys: Label | keys: Label"` hint text, keys emphasized.
    ///
    /// Returns the height used (1 for the border, 1 for the text).
    pub fn render(frame: &mut Frame, area: Rect, text: &str, workspace: &Workspace) -> Result<u16> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            // Hints are written "keys: Label"
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(keys.to_string(), t.emphasis_style()));
                spans.push(Span::styled(format!(": {}", label), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_focused_style(workspace))
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );

        Ok(2)
    }
}
