//! Semantic actions a key press can resolve to.

use serde::{Deserialize, Serialize};

/// Everything a key binding is allowed to trigger.
///
/// Serialized in snake_case so config overrides read naturally
/// (`action = "next_field"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Focus the row above.
    MoveUp,
    /// Focus the row below.
    MoveDown,
    /// Cursor left, or toggle when a checkbox row has focus.
    MoveLeft,
    /// Cursor right, or toggle when a checkbox row has focus.
    MoveRight,
    /// Cursor to the start of the input.
    Home,
    /// Cursor to the end of the input.
    End,
    /// Submit the form, or follow the focused link.
    Confirm,
    /// Leave the screen.
    Cancel,
    /// Flip the focused checkbox.
    ToggleSelect,
    /// Exit the application.
    Quit,
    /// Remove the character before the cursor.
    Backspace,
    /// Remove the character under the cursor.
    DeleteChar,
    /// Focus the next form row, wrapping at the bottom.
    NextField,
    /// Focus the previous form row, wrapping at the top.
    PrevField,
}
