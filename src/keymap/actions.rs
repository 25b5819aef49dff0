//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Select the previous card
    MoveUp,
    /// Select the next card
    MoveDown,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Focus the creation form
    GoToForm,

    // ============ Dialogs ============
    /// Confirm a dialog (Enter)
    Confirm,
    /// Dismiss a dialog / close help (Esc)
    Cancel,
    /// Answer yes
    Yes,
    /// Answer no
    No,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
    /// Reload the service list
    Refresh,

    // ============ Catalog ============
    /// Save the focused card, or submit the creation form
    Save,
    /// Delete the selected service
    Delete,
    /// Remove the selected image preview from its card
    RemoveImage,
    /// Select the previous image preview of the card
    PrevImage,
    /// Select the next image preview of the card
    NextImage,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Previous service",
            Action::MoveDown => "Next service",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::GoToForm => "Go to new service form",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / close",
            Action::Yes => "Yes",
            Action::No => "No",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Refresh => "Reload services",
            Action::Save => "Save service / add new service",
            Action::Delete => "Delete service",
            Action::RemoveImage => "Remove selected image",
            Action::PrevImage => "Previous image",
            Action::NextImage => "Next image",
            Action::Backspace => "Delete previous character",
            Action::DeleteChar => "Delete character",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::NextField
            | Action::PrevField
            | Action::GoToForm => "Navigation",
            Action::Confirm | Action::Cancel | Action::Yes | Action::No => "Dialogs",
            Action::Quit | Action::Help | Action::Refresh => "Global",
            Action::Save
            | Action::Delete
            | Action::RemoveImage
            | Action::PrevImage
            | Action::NextImage => "Catalog",
            Action::Backspace | Action::DeleteChar => "Text Editing",
        }
    }
}
