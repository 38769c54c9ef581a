//! Key bindings: a preset expanded into chords, shadowed per action by
//! user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// The active keymap: one preset plus any number of overrides.
///
/// An override claims its whole action, not just its chord. Binding `x`
/// to Quit also retires the preset's `q`, so the footer never advertises
/// a key that stopped working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base binding set.
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Overrides from the config file, checked before the preset.
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Resolve a key event to an action, if any binding claims it.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Active bindings in precedence order. A preset binding is dropped
    /// when any override exists for the same action.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let overridden = |action: Action| self.overrides.iter().any(|o| o.action == action);
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset_binding| !overridden(preset_binding.action)),
        );
        bindings
    }

    /// Hint line for the form footer, built from the live bindings so
    /// overrides show up in it.
    pub fn footer_form(&self) -> String {
        let quit = self.display_for(Action::Quit);
        let cancel = self.display_for(Action::Cancel);
        let leave = if quit == cancel {
            quit
        } else {
            format!("{quit}/{cancel}")
        };
        format!(
            "{}: Next Field | {}: Submit | {}: Toggle | {leave}: Quit",
            self.display_for(Action::NextField),
            self.display_for(Action::Confirm),
            self.display_for(Action::ToggleSelect),
        )
    }

    /// First chord bound to `action`, formatted for humans.
    fn display_for(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.action == action)
            .map_or_else(|| format!("{action:?}"), |binding| binding.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_standard_with_no_overrides() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_resolves_preset_chords() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_tab_cycles_fields() {
        let keymap = Keymap::default();
        let action = keymap.get_action(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(action, Some(Action::NextField));

        let action = keymap.get_action(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(action, Some(Action::PrevField));
    }

    #[test]
    fn test_override_wins_over_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Confirm)],
        };
        let action = keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::Confirm));
    }

    #[test]
    fn test_override_shadows_preset_binding_for_action() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+j", Action::Confirm)],
        };
        // The preset's enter chord for Confirm is retired by the override.
        let action = keymap.get_action(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, None);
        let action = keymap.get_action(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(action, Some(Action::Confirm));
    }

    #[test]
    fn test_vim_preset_resolves_j() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        let action = keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(action, Some(Action::MoveDown));
    }

    #[test]
    fn test_footer_mentions_active_bindings() {
        let keymap = Keymap::default();
        let footer = keymap.footer_form();
        assert!(footer.contains("Tab"));
        assert!(footer.contains("Enter"));
        assert!(footer.contains("Esc"));
    }

    #[test]
    fn test_footer_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("f10", Action::Quit)],
        };
        assert!(keymap.footer_form().contains("F10"));
    }
}
