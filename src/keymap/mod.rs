//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Save -> "Ctrl+S")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint line for the panel
    pub fn footer_panel(&self) -> String {
        format!(
            "Campo: {} | Salvar: {} | Excluir: {} | Remover imagem: {} | Recarregar: {} | Ajuda: {} | Sair: {}",
            self.get_key_display_for_action(Action::NextField),
            self.get_key_display_for_action(Action::Save),
            self.get_key_display_for_action(Action::Delete),
            self.get_key_display_for_action(Action::RemoveImage),
            self.get_key_display_for_action(Action::Refresh),
            self.get_key_display_for_action(Action::Help),
            self.get_key_display_for_action(Action::Quit),
        )
    }
}
