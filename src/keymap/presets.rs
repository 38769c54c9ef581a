//! Built-in binding sets. A preset answers for every form action; user
//! overrides in the config shadow it per action.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Which built-in binding set the keymap starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrow keys, Enter, Esc.
    #[default]
    Standard,
    /// hjkl on top of the standard keys.
    Vim,
    /// Ctrl-chords on top of the standard keys.
    Emacs,
}

/// Chords every preset shares. Arrows and editing keys stay live under
/// vim and emacs so muscle memory from either direction works.
const SHARED: &[(&str, Action)] = &[
    ("up", Action::MoveUp),
    ("down", Action::MoveDown),
    ("left", Action::MoveLeft),
    ("right", Action::MoveRight),
    ("home", Action::Home),
    ("end", Action::End),
    ("enter", Action::Confirm),
    ("esc", Action::Cancel),
    ("space", Action::ToggleSelect),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
    ("backspace", Action::Backspace),
    ("delete", Action::DeleteChar),
    ("tab", Action::NextField),
    ("shift+tab", Action::PrevField),
];

/// Letter chords only act while focus is outside a text field; the
/// screens feed printable keys to a focused input before the keymap.
const VIM: &[(&str, Action)] = &[
    ("k", Action::MoveUp),
    ("j", Action::MoveDown),
    ("h", Action::MoveLeft),
    ("l", Action::MoveRight),
    ("x", Action::DeleteChar),
];

const EMACS: &[(&str, Action)] = &[
    ("ctrl+p", Action::MoveUp),
    ("ctrl+n", Action::MoveDown),
    ("ctrl+b", Action::MoveLeft),
    ("ctrl+f", Action::MoveRight),
    ("ctrl+a", Action::Home),
    ("ctrl+e", Action::End),
    ("ctrl+g", Action::Cancel),
    ("ctrl+d", Action::DeleteChar),
];

impl KeymapPreset {
    /// Expand the preset into concrete bindings, preset-specific chords
    /// first so they win display lookups.
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let extras: &[(&str, Action)] = match self {
            KeymapPreset::Standard => &[],
            KeymapPreset::Vim => VIM,
            KeymapPreset::Emacs => EMACS,
        };
        extras
            .iter()
            .chain(SHARED)
            .map(|&(chord, action)| KeyBinding::new(chord, action))
            .collect()
    }
}
