//! Single-line checkbox row.
//!
//! Renders as `[✓] label` / `[ ] label` with a focus indicator, matching
//! the one-line consent rows on the sign-up screen.

use crate::styles::{theme, FOCUS_INDICATOR};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// A labelled checkbox on one line.
///
/// # Example
/// ```
/// use tidepool::widgets::CheckboxWidget;
///
/// let row = CheckboxWidget::new("I agree to the Terms & Privacy Policy")
///     .checked(true)
///     .focused(true);
/// // frame.render_widget(row, area);
/// ```
pub struct CheckboxWidget<'a> {
    /// Label shown next to the box
    label: &'a str,
    /// Whether the box is checked
    checked: bool,
    /// Whether the row has focus
    focused: bool,
}

impl<'a> CheckboxWidget<'a> {
    /// Create a new checkbox widget.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            checked: false,
            focused: false,
        }
    }

    /// Set whether the box is checked.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether the row has focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn glyph(&self) -> &'static str {
        if self.checked {
            "[✓]"
        } else {
            "[ ]"
        }
    }

    fn line(&self) -> Line<'a> {
        let t = theme();
        let indicator = if self.focused { FOCUS_INDICATOR } else { "  " };
        let glyph_style = if self.checked {
            t.success_style()
        } else {
            t.muted_style()
        };
        let label_style = if self.focused {
            t.highlight_style()
        } else {
            t.text_style()
        };

        Line::from(vec![
            Span::styled(indicator, t.title_style()),
            Span::styled(self.glyph(), glyph_style),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ])
    }
}

impl Widget for CheckboxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
