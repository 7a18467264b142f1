//! Keyboard dispatch.

use crate::editor::Editor;
use crate::host::Host;
use crate::input::KeyEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};

impl<H: Host> Editor<H> {
    /// Handle a key press. Returns `true` when the key was claimed and the
    /// host should suppress its default handling.
    pub fn key_down(&mut self, ev: &KeyEvent) -> bool {
        let Some(action) = ShortcutMap::resolve(&ev.key, ev.modifiers) else {
            return false;
        };
        log::debug!("shortcut {action:?}");

        let step = self.config.keyboard_scroll_step;
        match action {
            ShortcutAction::ScrollUp => self.scroll_by(0.0, -step),
            ShortcutAction::ScrollDown => self.scroll_by(0.0, step),
            ShortcutAction::ScrollLeft => self.scroll_by(-step, 0.0),
            ShortcutAction::ScrollRight => self.scroll_by(step, 0.0),
            ShortcutAction::ZoomIn => {
                self.zoom_in();
            }
            ShortcutAction::ZoomOut => {
                self.zoom_out();
            }
            ShortcutAction::ResetView => self.reset_view(),
            ShortcutAction::SelectAll => self.select_all(),
            ShortcutAction::Deselect => self.clear_selection(),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
        }
        true
    }
}
