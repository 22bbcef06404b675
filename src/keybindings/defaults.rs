//! Default keybindings for mdglance
//!
//! This module defines the default keybindings that are used when no
//! user configuration is provided. Uses keybinds-rs key string syntax.

use super::{Action, KeybindingMode, Keybindings};

/// Create the default keybindings configuration
pub fn default_keybindings() -> Keybindings {
    let mut kb = Keybindings::new();

    add_pager_mode(&mut kb);
    add_outline_mode(&mut kb);
    add_help_mode(&mut kb);

    kb
}

/// Bind a key, panicking on invalid key syntax (only used for built-in defaults)
fn bind(kb: &mut Keybindings, mode: KeybindingMode, key: &str, action: Action) {
    kb.bind(mode, key, action)
        .unwrap_or_else(|e| panic!("Invalid default keybinding '{}': {}", key, e));
}

/// Page and outline toggles shared by the pager and the focused outline.
fn add_shared(kb: &mut Keybindings, mode: KeybindingMode) {
    use Action::*;

    bind(kb, mode, "f", PageDown);
    bind(kb, mode, "Space", PageDown);
    bind(kb, mode, "PageDown", PageDown);
    bind(kb, mode, "b", PageUp);
    bind(kb, mode, "PageUp", PageUp);
    bind(kb, mode, "d", HalfPageDown);
    bind(kb, mode, "u", HalfPageUp);

    bind(kb, mode, "o", ToggleOutline);
    bind(kb, mode, "]", NextHeading);
    bind(kb, mode, "[", PrevHeading);

    bind(kb, mode, "r", Reload);
    bind(kb, mode, "c", CopyContents);

    bind(kb, mode, "?", ToggleHelp);
    bind(kb, mode, "q", Quit);
    bind(kb, mode, "Ctrl+c", Quit);
}

fn add_pager_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Pager;

    add_shared(kb, Pager);

    bind(kb, Pager, "j", ScrollDown);
    bind(kb, Pager, "Down", ScrollDown);
    bind(kb, Pager, "Enter", ScrollDown);
    bind(kb, Pager, "k", ScrollUp);
    bind(kb, Pager, "Up", ScrollUp);
    bind(kb, Pager, "g", GoToTop);
    bind(kb, Pager, "Home", GoToTop);
    bind(kb, Pager, "G", GoToBottom);
    bind(kb, Pager, "End", GoToBottom);

    bind(kb, Pager, "Tab", ToggleFocus);
    bind(kb, Pager, "Escape", DismissStatus);
}

fn add_outline_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Outline;

    add_shared(kb, Outline);

    bind(kb, Outline, "j", CursorDown);
    bind(kb, Outline, "Down", CursorDown);
    bind(kb, Outline, "k", CursorUp);
    bind(kb, Outline, "Up", CursorUp);
    bind(kb, Outline, "g", CursorFirst);
    bind(kb, Outline, "Home", CursorFirst);
    bind(kb, Outline, "G", CursorLast);
    bind(kb, Outline, "End", CursorLast);
    bind(kb, Outline, "Enter", JumpToCursor);

    bind(kb, Outline, "Tab", ToggleFocus);
    bind(kb, Outline, "Escape", ToggleFocus);
}

fn add_help_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Help;

    bind(kb, Help, "?", ToggleHelp);
    bind(kb, Help, "Escape", ToggleHelp);
    bind(kb, Help, "q", Quit);
    bind(kb, Help, "Ctrl+c", Quit);
}
