//! Key-hint footer bar.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Hint bar under every screen, fed by the keymap so overrides show up.
pub struct Footer;

impl Footer {
    /// Lines the footer occupies (1 for border, 1 for text).
    pub const HEIGHT: u16 = 2;

    /// Render the hint text. Hints are " | " separated; a "Key: Label"
    /// pair gets the key emphasized and the label muted.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let t = theme();

        let mut spans: Vec<Span> = Vec::new();
        for hint in text.split(" | ") {
            if !spans.is_empty() {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match hint.split_once(": ") {
                Some((key, label)) => {
                    spans.push(Span::styled(key.to_string(), t.emphasis_style()));
                    spans.push(Span::styled(format!(": {label}"), t.muted_style()));
                }
                None => spans.push(Span::styled(hint.to_string(), t.text_style())),
            }
        }

        let rule = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let body = rule.inner(area);

        frame.render_widget(rule, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            body,
        );
    }
}
