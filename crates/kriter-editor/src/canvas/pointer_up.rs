//! Pointer-up and pointer-cancel: finish or abandon the gesture.

use super::Mode;
use crate::editor::Editor;
use crate::host::Host;
use crate::input::{PointerEvent, Target};
use kriter_core::{NodeId, NodeType, Rect};

impl<H: Host> Editor<H> {
    pub fn pointer_up(&mut self, ev: &PointerEvent) {
        self.end_pointer(ev, true);
    }

    /// Like [`pointer_up`](Self::pointer_up) but commits nothing: no
    /// click, no selection, and an in-progress drag is rolled back.
    pub fn pointer_cancel(&mut self, ev: &PointerEvent) {
        self.end_pointer(ev, false);
    }

    fn end_pointer(&mut self, ev: &PointerEvent, commit: bool) {
        if self.connector.is_tracking(ev.pointer_id) {
            self.finish_connection(ev, commit);
            return;
        }
        if !self.gesture.is_tracking(ev.pointer_id) {
            return;
        }

        let mode = self.gesture.mode;
        if commit {
            self.commit_gesture(mode, ev);
        } else if mode.is_dragging() {
            self.cancel_drag();
        }

        self.clear_rubber_band();
        self.gesture.release(ev.pointer_id);

        match self.gesture.pointer_count() {
            0 => self.gesture.reset(),
            1 => {
                let pos = self.gesture.pointers[0].pos;
                self.gesture.mode = Mode::Panning;
                self.gesture.start = pos;
                self.gesture.has_moved = false;
            }
            _ => {
                if let Mode::Zooming { .. } = mode {
                    let last_distance = self.gesture.pinch_distance().unwrap_or_default();
                    self.gesture.mode = Mode::Zooming { last_distance };
                }
            }
        }
    }

    fn commit_gesture(&mut self, mode: Mode, ev: &PointerEvent) {
        let moved = self.gesture.has_moved;
        match mode {
            Mode::Selecting { start } if moved => {
                let end = self.viewport.screen_to_chart(ev.position());
                let rect = Rect::from_corners(start, end);
                let hits = self.doc.nodes_in_rect(&rect);
                log::debug!("rubber band selected {} nodes", hits.len());
                self.doc.selection.extend(hits);
                self.notify_nodes();
            }
            Mode::PotentialDrag { target } | Mode::PotentialMultiDrag { target }
                if !moved && !ev.target.is_interactive() =>
            {
                self.click_node(target);
            }
            Mode::DraggingCard { .. } | Mode::DraggingMulti => self.commit_drag(),
            _ => {}
        }
    }

    /// Keep the dragged positions.
    pub(crate) fn commit_drag(&mut self) {
        log::info!("moved nodes");
        self.gesture.drag_snapshot = None;
        self.persist();
        self.notify_connections();
    }

    /// Restore the positions from before the drag, if its snapshot is
    /// still the newest history entry.
    fn cancel_drag(&mut self) {
        let Some(seq) = self.gesture.drag_snapshot.take() else {
            return;
        };
        if self.history.rollback(seq, &mut self.doc) {
            log::debug!("drag cancelled, positions restored");
            self.notify_nodes();
            self.notify_connections();
        }
    }

    fn click_node(&mut self, id: NodeId) {
        let Some(kind) = self.doc.node(id).map(|n| n.kind) else {
            log::debug!("click on removed node {id:?}");
            return;
        };
        match kind {
            NodeType::Method => {
                log::debug!("toggle method filter {id:?}");
                self.host.toggle_method_filter(id);
            }
            NodeType::Process => {
                log::debug!("open detail {id:?}");
                self.host.open_detail(id);
            }
            NodeType::Hub => {}
        }
    }

    fn finish_connection(&mut self, ev: &PointerEvent, commit: bool) {
        let target = if commit { ev.target } else { Target::Canvas };
        let Some(request) = self.connector.finish(target) else {
            return;
        };
        if let Some(req) = request {
            self.connect(req.from, req.from_pos, req.to, req.to_pos);
        }
        self.notify_overlay();
    }

    /// Drop the live rubber band and its preview flags.
    pub(crate) fn clear_rubber_band(&mut self) {
        let had_box = self.gesture.selection_box.take().is_some();
        let had_preview = !self.doc.preview.is_empty();
        if had_preview {
            self.doc.preview.clear();
            self.notify_nodes();
        }
        if had_box {
            self.notify_overlay();
        }
    }
}
