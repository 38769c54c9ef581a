//! Single-line button and link rows for the form cards.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// A centered `[ label ]` row that highlights when focused.
pub struct ButtonWidget<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> ButtonWidget<'a> {
    /// Create a new button widget.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    /// Set whether the button has focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            theme().highlight_style()
        } else {
            theme().text_style()
        };
        Line::styled(format!("[ {} ]", self.label), style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// A centered underlined row that moves the user to the other flow.
pub struct LinkWidget<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> LinkWidget<'a> {
    /// Create a new link widget.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    /// Set whether the link has focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LinkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            theme().highlight_style()
        } else {
            theme().link_style()
        };
        Line::styled(self.label, style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
