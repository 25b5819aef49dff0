//! Preset keymaps: Standard, Vim
//!
//! Text fields have focus almost everywhere in the panel, so catalog and
//! global actions sit behind Ctrl or function keys in every preset.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Tab, Enter, Esc
    #[default]
    Standard,
    /// Standard plus Ctrl+J/K card navigation
    Vim,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("ctrl+n", Action::GoToForm),
        // Dialogs
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
        // Global
        KeyBinding::new("ctrl+q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("ctrl+r", Action::Refresh),
        KeyBinding::new("f5", Action::Refresh),
        // Catalog
        KeyBinding::new("ctrl+s", Action::Save),
        KeyBinding::new("ctrl+d", Action::Delete),
        KeyBinding::new("ctrl+x", Action::RemoveImage),
        KeyBinding::new("pageup", Action::PrevImage),
        KeyBinding::new("alt+left", Action::PrevImage),
        KeyBinding::new("pagedown", Action::NextImage),
        KeyBinding::new("alt+right", Action::NextImage),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("ctrl+k", Action::MoveUp),
        KeyBinding::new("ctrl+j", Action::MoveDown),
    ];
    bindings.extend(standard_bindings());
    bindings
}
