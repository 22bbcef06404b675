//! Action definitions for keybindings
//!
//! This module defines all bindable actions in mdglance.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// All bindable actions in mdglance
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Action {
    // === Scrolling ===
    /// Scroll content down one line
    ScrollDown,
    /// Scroll content up one line
    ScrollUp,
    PageDown,
    PageUp,
    HalfPageDown,
    HalfPageUp,
    /// Jump to the top of the document
    GoToTop,
    /// Jump to the bottom of the document
    GoToBottom,

    // === Outline ===
    /// Show or hide the outline sidebar
    ToggleOutline,
    /// Move keyboard focus between content and outline
    ToggleFocus,
    /// Jump to the heading after the current one
    NextHeading,
    /// Jump to the heading before the current one
    PrevHeading,
    /// Move the outline cursor up
    CursorUp,
    /// Move the outline cursor down
    CursorDown,
    /// Move the outline cursor to the first heading
    CursorFirst,
    /// Move the outline cursor to the last heading
    CursorLast,
    /// Scroll the content to the heading under the cursor
    JumpToCursor,

    // === Document ===
    /// Re-read the file from disk
    Reload,
    /// Copy the raw document to the clipboard
    CopyContents,

    // === Application ===
    ToggleHelp,
    /// Clear the status message
    DismissStatus,
    Quit,
}

impl Action {
    /// Get a human-readable description of the action
    pub fn description(&self) -> &'static str {
        match self {
            Action::ScrollDown => "Scroll down",
            Action::ScrollUp => "Scroll up",
            Action::PageDown => "Page down",
            Action::PageUp => "Page up",
            Action::HalfPageDown => "Half page down",
            Action::HalfPageUp => "Half page up",
            Action::GoToTop => "Go to top",
            Action::GoToBottom => "Go to bottom",

            Action::ToggleOutline => "Toggle outline",
            Action::ToggleFocus => "Switch focus",
            Action::NextHeading => "Next heading",
            Action::PrevHeading => "Previous heading",
            Action::CursorUp => "Cursor up",
            Action::CursorDown => "Cursor down",
            Action::CursorFirst => "First heading",
            Action::CursorLast => "Last heading",
            Action::JumpToCursor => "Jump to heading",

            Action::Reload => "Reload file",
            Action::CopyContents => "Copy contents",

            Action::ToggleHelp => "Toggle help",
            Action::DismissStatus => "Dismiss message",
            Action::Quit => "Quit",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::ScrollDown
            | Action::ScrollUp
            | Action::PageDown
            | Action::PageUp
            | Action::HalfPageDown
            | Action::HalfPageUp
            | Action::GoToTop
            | Action::GoToBottom => "Scroll",

            Action::ToggleOutline
            | Action::ToggleFocus
            | Action::NextHeading
            | Action::PrevHeading
            | Action::CursorUp
            | Action::CursorDown
            | Action::CursorFirst
            | Action::CursorLast
            | Action::JumpToCursor => "Outline",

            Action::Reload | Action::CopyContents => "Document",

            Action::ToggleHelp | Action::DismissStatus | Action::Quit => "Application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_action_names_round_trip_through_strum() {
        for action in Action::iter() {
            let name = action.to_string();
            assert_eq!(Action::from_str(&name).unwrap(), action);
        }
    }

    #[test]
    fn test_every_action_is_described() {
        for action in Action::iter() {
            assert!(!action.description().is_empty(), "{:?}", action);
            assert!(!action.category().is_empty(), "{:?}", action);
        }
    }

    #[test]
    fn test_serde_uses_pascal_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            action: Action,
        }
        let parsed: Wrapper = toml::from_str(r#"action = "JumpToCursor""#).unwrap();
        assert_eq!(parsed.action, Action::JumpToCursor);
    }
}
