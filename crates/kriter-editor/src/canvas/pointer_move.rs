//! Pointer-move: threshold detection and per-frame gesture updates.

use super::Mode;
use crate::editor::Editor;
use crate::host::Host;
use crate::input::PointerEvent;
use indexmap::IndexSet;
use kriter_core::{NodeId, Point, Rect};

impl<H: Host> Editor<H> {
    pub fn pointer_move(&mut self, ev: &PointerEvent) {
        let pos = ev.position();

        if self.connector.is_tracking(ev.pointer_id) {
            let cursor = self.viewport.screen_to_chart(pos);
            self.connector.track(cursor);
            self.notify_overlay();
            return;
        }

        let Some(last) = self.gesture.advance(ev.pointer_id, pos) else {
            return;
        };

        if !self.gesture.has_moved && pos.distance(self.gesture.start) > self.config.drag_threshold
        {
            self.gesture.has_moved = true;
            self.cross_threshold();
        }

        let (dx, dy) = (pos.x - last.x, pos.y - last.y);
        match self.gesture.mode {
            Mode::Zooming { last_distance } => self.pinch(last_distance),
            Mode::DraggingCard { target } => self.drag_nodes(&[target], dx, dy),
            Mode::DraggingMulti => {
                let ids: Vec<NodeId> = self.doc.selection.iter().copied().collect();
                self.drag_nodes(&ids, dx, dy);
            }
            Mode::Selecting { start } if self.gesture.has_moved => {
                let current = self.viewport.screen_to_chart(pos);
                self.update_rubber_band(start, current);
            }
            Mode::Panning => {
                self.viewport.pan_by(dx, dy);
                self.notify_viewport();
            }
            _ => {}
        }
    }

    /// A press became a drag: snapshot once, before the first write.
    fn cross_threshold(&mut self) {
        let next = match self.gesture.mode {
            Mode::PotentialDrag { target } => {
                let seq = self.history.save_state("Move node", &self.doc);
                self.gesture.drag_snapshot = Some(seq);
                Mode::DraggingCard { target }
            }
            Mode::PotentialMultiDrag { .. } => {
                let seq = self.history.save_state("Move nodes", &self.doc);
                self.gesture.drag_snapshot = Some(seq);
                Mode::DraggingMulti
            }
            other => other,
        };
        if next != self.gesture.mode {
            log::debug!("drag start: {next:?}");
            self.gesture.mode = next;
        }
    }

    fn drag_nodes(&mut self, ids: &[NodeId], dx: f32, dy: f32) {
        let (cx, cy) = self.viewport.delta_to_chart(dx, dy);
        for &id in ids {
            if let Some(node) = self.doc.node_mut(id) {
                node.translate(cx, cy);
            }
        }
        log::trace!("drag {} nodes by ({cx}, {cy})", ids.len());
        self.notify_nodes();
        self.notify_connections();
    }

    fn update_rubber_band(&mut self, start: Point, current: Point) {
        let rect = Rect::from_corners(start, current);
        let preview: IndexSet<NodeId> = self.doc.nodes_in_rect(&rect).into_iter().collect();
        if preview != self.doc.preview {
            self.doc.preview = preview;
            self.notify_nodes();
        }
        self.gesture.selection_box = Some(rect);
        self.notify_overlay();
    }

    fn pinch(&mut self, last_distance: f32) {
        let Some(distance) = self.gesture.pinch_distance() else {
            return;
        };
        if last_distance > 0.0 && distance > 0.0 {
            let scale = self
                .config
                .clamp_scale(self.viewport.scale * distance / last_distance);
            if scale != self.viewport.scale {
                log::trace!("pinch scale {scale}");
                self.viewport.scale = scale;
                self.notify_viewport();
            }
        }
        self.gesture.mode = Mode::Zooming {
            last_distance: distance,
        };
    }
}
