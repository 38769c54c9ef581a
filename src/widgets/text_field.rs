//! Bordered single-line field. Pairs a [`LineEdit`] value with the
//! title, placeholder and mask treatment the forms use.

use crate::styles::theme;
use crate::utils::line_edit::LineEdit;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::borrow::Cow;

/// Renders one form field: rounded border, optional title, the value or
/// its placeholder, bullets instead of the value when masked.
///
/// # Example
/// ```
/// use tidepool::utils::LineEdit;
/// use tidepool::widgets::TextFieldWidget;
///
/// let edit = LineEdit::with_text("pearl@reef.example");
/// let field = TextFieldWidget::new(&edit)
///     .title("Email")
///     .placeholder("you@example.com")
///     .focused(true);
/// // frame.render_text_field_widget(field, area);
/// ```
pub struct TextFieldWidget<'a> {
    edit: &'a LineEdit,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(edit: &'a LineEdit) -> Self {
        Self {
            edit,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Draw bullets instead of the value. The placeholder stays readable;
    /// until something is typed there is nothing to hide.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> Cow<'a, str> {
        match (self.edit.is_empty(), self.masked) {
            (true, _) => Cow::Borrowed(self.placeholder.unwrap_or_default()),
            (false, true) => Cow::Owned("•".repeat(self.edit.text().chars().count())),
            (false, false) => Cow::Borrowed(self.edit.text()),
        }
    }

    fn frame_block(&self) -> Block<'a> {
        let border = if self.focused {
            theme().border_focused_style()
        } else {
            theme().border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        match self.title {
            Some(title) => block.title(format!(" {title} ")),
            None => block,
        }
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = if self.edit.is_empty() {
            theme().muted_style()
        } else {
            theme().text_style()
        };
        Paragraph::new(self.display_text())
            .block(self.frame_block())
            .style(body)
            .render(area, buf);
    }
}

/// Renders through [`Frame`] so the terminal cursor can land inside the
/// field; the plain [`Widget`] impl has no access to it.
pub trait TextFieldWidgetExt {
    /// Render the field and park the cursor at the edit position when
    /// the field has focus.
    fn render_text_field_widget(&mut self, field: TextFieldWidget, area: Rect);
}

impl TextFieldWidgetExt for Frame<'_> {
    fn render_text_field_widget(&mut self, field: TextFieldWidget, area: Rect) {
        let inner = field.frame_block().inner(area);
        let cursor = field.edit.cursor();
        let focused = field.focused;

        self.render_widget(field, area);

        if focused && inner.width > 0 {
            let column = cursor.min(inner.width as usize - 1) as u16;
            self.set_cursor_position((inner.x + column, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_field_settings() {
        let edit = LineEdit::with_text("kelp");
        let field = TextFieldWidget::new(&edit)
            .title("Email")
            .placeholder("you@reef.example")
            .focused(true)
            .masked(true);

        assert!(field.focused);
        assert!(field.masked);
        assert_eq!(field.title, Some("Email"));
        assert_eq!(field.placeholder, Some("you@reef.example"));
    }

    #[test]
    fn test_placeholder_shows_while_empty() {
        let edit = LineEdit::new();
        let field = TextFieldWidget::new(&edit).placeholder("Your name");
        assert_eq!(field.display_text(), "Your name");
    }

    #[test]
    fn test_value_shows_as_typed() {
        let edit = LineEdit::with_text("driftwood");
        let field = TextFieldWidget::new(&edit);
        assert_eq!(field.display_text(), "driftwood");
    }

    #[test]
    fn test_masked_value_is_all_bullets() {
        let edit = LineEdit::with_text("selkie-song");
        let field = TextFieldWidget::new(&edit).masked(true);
        assert_eq!(field.display_text(), "•••••••••••");
        assert_eq!(field.display_text().chars().count(), 11);
    }

    #[test]
    fn test_masked_placeholder_stays_readable() {
        // Nothing entered yet, so there is no secret to hide
        let edit = LineEdit::new();
        let field = TextFieldWidget::new(&edit)
            .placeholder("Choose a password")
            .masked(true);
        assert_eq!(field.display_text(), "Choose a password");
    }

    #[test]
    fn test_render_draws_border_and_text() {
        let edit = LineEdit::with_text("abc");
        let field = TextFieldWidget::new(&edit).title("Email");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf);

        let content: String = (0..20)
            .map(|x| buf[(x, 1)].symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(content.contains("abc"));
    }
}
