//! One key-to-action mapping, parsed from chords like `ctrl+n`,
//! `shift+tab` or plain `j`.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A chord bound to an [`Action`].
///
/// The chord is stored as the user wrote it and parsed on match, so a
/// config with one bad override still loads and the rest of the keymap
/// keeps working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key chord, e.g. `"j"`, `"down"`, `"ctrl+n"`, `"shift+tab"`.
    pub key: String,

    /// What the chord triggers.
    pub action: Action,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Whether this binding fires for the given key event.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok((bound_code, bound_modifiers)) = parse_chord(&self.key) else {
            return false;
        };
        // Terminals disagree on whether BackTab carries the shift bit.
        if bound_code == KeyCode::BackTab && code == KeyCode::BackTab {
            return true;
        }
        bound_code == code && bound_modifiers == modifiers
    }

    /// Human-facing form of the chord, e.g. `ctrl+n` becomes `Ctrl+N`.
    pub fn display(&self) -> String {
        self.key
            .split('+')
            .map(|token| pretty_token(token.trim()))
            .collect::<Vec<_>>()
            .join("+")
    }
}

/// Parse a chord like `ctrl+shift+n`. The final token names the key,
/// every token before it a modifier.
fn parse_chord(chord: &str) -> Result<(KeyCode, KeyModifiers), String> {
    let chord = chord.trim().to_lowercase();
    let mut tokens: Vec<&str> = chord.split('+').map(str::trim).collect();
    let key_token = tokens.pop().unwrap_or_default();

    let mut modifiers = KeyModifiers::NONE;
    for token in tokens {
        modifiers |= modifier_bit(token)?;
    }

    let mut code = key_code(key_token)?;
    // shift+tab arrives from the terminal as BackTab, never Tab+shift.
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        code = KeyCode::BackTab;
    }

    Ok((code, modifiers))
}

fn modifier_bit(token: &str) -> Result<KeyModifiers, String> {
    match token {
        "ctrl" | "control" => Ok(KeyModifiers::CONTROL),
        "alt" | "option" => Ok(KeyModifiers::ALT),
        "shift" => Ok(KeyModifiers::SHIFT),
        "super" | "meta" | "cmd" | "command" => Ok(KeyModifiers::SUPER),
        other => Err(format!("unknown modifier '{other}'")),
    }
}

fn key_code(token: &str) -> Result<KeyCode, String> {
    let named = match token {
        "up" | "arrow_up" => Some(KeyCode::Up),
        "down" | "arrow_down" => Some(KeyCode::Down),
        "left" | "arrow_left" => Some(KeyCode::Left),
        "right" | "arrow_right" => Some(KeyCode::Right),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        _ => None,
    };
    if let Some(code) = named {
        return Ok(code);
    }

    // f1 through f12
    if let Some(digits) = token.strip_prefix('f') {
        if let Ok(n) = digits.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Ok(KeyCode::F(n));
            }
        }
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(format!("unknown key '{token}'")),
    }
}

fn pretty_token(token: &str) -> String {
    let token = token.to_lowercase();
    match token.as_str() {
        "ctrl" | "control" => "Ctrl".into(),
        "alt" | "option" => "Alt".into(),
        "shift" => "Shift".into(),
        "super" | "meta" | "cmd" | "command" => "Cmd".into(),
        "up" | "arrow_up" => "↑".into(),
        "down" | "arrow_down" => "↓".into(),
        "left" | "arrow_left" => "←".into(),
        "right" | "arrow_right" => "→".into(),
        "enter" | "return" => "Enter".into(),
        "esc" | "escape" => "Esc".into(),
        "space" => "Space".into(),
        "tab" => "Tab".into(),
        "backtab" => "Shift+Tab".into(),
        "backspace" | "bs" => "Backspace".into(),
        "delete" | "del" => "Del".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        _ => token.to_uppercase(),
    }
}
