use crate::keymap::Action;
use crossterm::event::KeyCode;

/// Single-line editing state shared by every form field.
///
/// The value is kept verbatim: no trimming, no case folding, and
/// whitespace is content. What the user typed is what a form submits.
///
/// # Example
/// ```
/// use tidepool::utils::LineEdit;
///
/// let mut edit = LineEdit::with_text("pearl");
/// edit.backspace();
/// assert_eq!(edit.text(), "pear");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEdit {
    text: String,
    /// Byte offset into `text`, always on a char boundary.
    cursor: usize,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// The value exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars, for rendering.
    pub fn cursor(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// True only for a zero-length value; whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the value verbatim and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor. Control characters are dropped; anything
    /// printable, ASCII or not, goes in as typed.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some((start, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.remove(start);
            self.cursor = start;
        }
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Apply a raw key code. Returns true if the key was consumed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Apply a keymap action. Returns true if the action was consumed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Whether a keymap action may fire while a field is being edited.
    ///
    /// Movement and editing actions pass through; anything else, `Quit`
    /// or `ToggleSelect` say, must not trigger mid-typing. Screens route
    /// printable chars into the field before consulting the keymap, so
    /// an allowed action only ever arrives on a non-text key (arrows,
    /// Tab, Enter) or a modified one (Ctrl+E).
    pub fn allows_action_while_editing(action: &Action) -> bool {
        matches!(
            action,
            // Leaving the field or the screen
            Action::Cancel
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::MoveUp
                | Action::MoveDown
                // In-field editing
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}
