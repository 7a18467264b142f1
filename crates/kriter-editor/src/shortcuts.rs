//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. Arrow keys and
//! Escape resolve regardless of modifiers; everything else needs the
//! platform command key (⌘ on macOS, Ctrl elsewhere).

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── View ──
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    ZoomIn,
    ZoomOut,
    ResetView,

    // ── Selection ──
    SelectAll,
    Deselect,

    // ── History ──
    Undo,
    Redo,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// Returns `None` if the key combo has no binding; the host should then
    /// let the platform handle the key.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        match key {
            "ArrowUp" => return Some(ShortcutAction::ScrollUp),
            "ArrowDown" => return Some(ShortcutAction::ScrollDown),
            "ArrowLeft" => return Some(ShortcutAction::ScrollLeft),
            "ArrowRight" => return Some(ShortcutAction::ScrollRight),
            "Escape" => return Some(ShortcutAction::Deselect),
            _ => {}
        }

        if !modifiers.command() {
            return None;
        }

        if modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        match key {
            "a" | "A" => Some(ShortcutAction::SelectAll),
            "z" | "Z" => Some(ShortcutAction::Undo),
            "y" | "Y" => Some(ShortcutAction::Redo),
            "=" | "+" => Some(ShortcutAction::ZoomIn),
            "-" => Some(ShortcutAction::ZoomOut),
            "0" => Some(ShortcutAction::ResetView),
            _ => None,
        }
    }
}
