//! Pointer-down: capture the pointer and pick the gesture.

use super::Mode;
use crate::editor::Editor;
use crate::host::Host;
use crate::input::{NodePart, PointerButton, PointerEvent, Target};

impl<H: Host> Editor<H> {
    /// Handle a pointer press. Returns `true` if the editor captured the
    /// pointer; the host should then route its moves and release here.
    pub fn pointer_down(&mut self, ev: &PointerEvent) -> bool {
        if let Some(id) = ev.target.node_id()
            && !self.doc.contains_node(id)
        {
            log::debug!("pointer down on unknown node {id:?}");
            return false;
        }

        match ev.target {
            Target::Node {
                part: NodePart::Anchor(_),
                ..
            } => return self.start_connection(ev),
            Target::Node {
                part: NodePart::Actions | NodePart::Interactive,
                ..
            } => return false,
            _ => {}
        }

        // Anchors are the only live targets while drawing connections.
        if self.connector.is_active() {
            return false;
        }

        let was_dragging = self.gesture.mode.is_dragging();
        self.gesture.press(ev.pointer_id, ev.position());

        match self.gesture.pointer_count() {
            1 => self.press_single(ev),
            2 => {
                if was_dragging {
                    self.commit_drag();
                }
                self.clear_rubber_band();
                let last_distance = self.gesture.pinch_distance().unwrap_or_default();
                log::debug!("pinch start at distance {last_distance}");
                self.gesture.mode = Mode::Zooming { last_distance };
            }
            _ => {}
        }
        true
    }

    fn press_single(&mut self, ev: &PointerEvent) {
        let mode = match ev.target.node_id() {
            Some(id) if self.doc.is_selected(id) => Mode::PotentialMultiDrag { target: id },
            Some(id) if ev.modifiers.extend() => {
                self.doc.selection.insert(id);
                self.notify_nodes();
                Mode::PotentialMultiDrag { target: id }
            }
            Some(id) => {
                self.clear_selection();
                Mode::PotentialDrag { target: id }
            }
            None => {
                if !ev.modifiers.extend() {
                    self.clear_selection();
                }
                match ev.button {
                    PointerButton::Secondary => Mode::Selecting {
                        start: self.viewport.screen_to_chart(ev.position()),
                    },
                    _ => Mode::Panning,
                }
            }
        };
        log::debug!("pointer {} down: {mode:?}", ev.pointer_id);
        self.gesture.mode = mode;
    }

    fn start_connection(&mut self, ev: &PointerEvent) -> bool {
        let cursor = self.viewport.screen_to_chart(ev.position());
        if !self
            .connector
            .start(&self.doc, ev.pointer_id, ev.target, cursor)
        {
            return false;
        }
        self.notify_overlay();
        true
    }
}
