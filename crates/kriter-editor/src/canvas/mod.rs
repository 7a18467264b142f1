//! Canvas interaction engine.
//!
//! Turns raw pointer, wheel and key events into panning, zooming, card
//! dragging, rubber-band selection and clicks. One explicit [`Mode`] holds
//! the current gesture; auxiliary state tracks every captured pointer.
//!
//! ```text
//! Idle ─▶ PotentialDrag ──(> threshold)──▶ DraggingCard      (card, not selected)
//! Idle ─▶ PotentialMultiDrag ──(> threshold)──▶ DraggingMulti (card in selection / Shift)
//! Idle ─▶ Selecting                                            (secondary button on canvas)
//! Idle ─▶ Panning                                              (other buttons on canvas)
//! Any  ─▶ Zooming                                              (second pointer down)
//!
//! Any ─▶ Idle      (last pointer up / cancel)
//! Any ─▶ Panning   (one of two pointers up)
//! ```
//!
//! ## Modules
//!
//! - `pointer_down` - gesture start, selection on press
//! - `pointer_move` - threshold, drag, rubber band, pan, pinch
//! - `pointer_up` - commit/click on release, rollback on cancel
//! - `zoom` - wheel zoom to cursor, zoom buttons
//! - `keyboard` - shortcut dispatch

mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod zoom;

use kriter_core::{NodeId, Point, Rect};
use smallvec::SmallVec;

/// Current interaction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Mode {
    #[default]
    Idle,
    /// Scrolling the canvas with the pointer.
    Panning,
    /// Pressed on an unselected card; becomes a drag past the threshold.
    PotentialDrag { target: NodeId },
    /// Pressed on a selected card (or Shift-added one).
    PotentialMultiDrag { target: NodeId },
    DraggingCard { target: NodeId },
    /// Dragging every selected card together.
    DraggingMulti,
    /// Rubber band anchored at `start` (chart space).
    Selecting { start: Point },
    /// Two-pointer pinch; distance between pointers at the last frame.
    Zooming { last_distance: f32 },
}

impl Mode {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Mode::DraggingCard { .. } | Mode::DraggingMulti)
    }

    /// Card a not-yet-dragged press landed on.
    pub fn pressed_node(&self) -> Option<NodeId> {
        match self {
            Mode::PotentialDrag { target } | Mode::PotentialMultiDrag { target } => Some(*target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrackedPointer {
    id: u32,
    /// Last seen position, screen space.
    pos: Point,
}

/// Mode plus the captured pointers it is driven by.
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    mode: Mode,
    pointers: SmallVec<[TrackedPointer; 2]>,
    /// Screen position the threshold is measured from.
    start: Point,
    has_moved: bool,
    /// Live rubber band, chart space.
    selection_box: Option<Rect>,
    /// History entry taken when the current drag crossed the threshold.
    drag_snapshot: Option<u64>,
}

impl Gesture {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_tracking(&self, pointer_id: u32) -> bool {
        self.pointers.iter().any(|p| p.id == pointer_id)
    }

    pub fn selection_box(&self) -> Option<Rect> {
        self.selection_box
    }

    /// Capture a pointer (or refresh its position if already captured) and
    /// restart threshold measurement from `pos`.
    fn press(&mut self, pointer_id: u32, pos: Point) {
        match self.pointers.iter_mut().find(|p| p.id == pointer_id) {
            Some(p) => p.pos = pos,
            None => self.pointers.push(TrackedPointer { id: pointer_id, pos }),
        }
        self.start = pos;
        self.has_moved = false;
    }

    /// Record a new position; returns the previous one for tracked pointers.
    fn advance(&mut self, pointer_id: u32, pos: Point) -> Option<Point> {
        let p = self.pointers.iter_mut().find(|p| p.id == pointer_id)?;
        Some(std::mem::replace(&mut p.pos, pos))
    }

    fn release(&mut self, pointer_id: u32) -> bool {
        let before = self.pointers.len();
        self.pointers.retain(|p| p.id != pointer_id);
        self.pointers.len() != before
    }

    fn pinch_distance(&self) -> Option<f32> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some(a.pos.distance(b.pos)),
            _ => None,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn press_tracks_each_pointer_once() {
        let mut g = Gesture::default();
        g.press(1, Point::new(10.0, 0.0));
        g.press(1, Point::new(0.0, 0.0));
        g.press(2, Point::new(30.0, 40.0));

        assert_eq!(g.pointer_count(), 2);
        assert_eq!(g.pinch_distance(), Some(50.0));
        assert_eq!(g.start, Point::new(30.0, 40.0));
    }

    #[test]
    fn advance_ignores_untracked_pointers() {
        let mut g = Gesture::default();
        g.press(1, Point::new(10.0, 10.0));

        assert_eq!(g.advance(1, Point::new(12.0, 10.0)), Some(Point::new(10.0, 10.0)));
        assert_eq!(g.advance(7, Point::new(0.0, 0.0)), None);
        assert!(g.release(1));
        assert!(!g.release(1));
    }

    #[test]
    fn pressed_node_only_before_drag() {
        let id = NodeId::intern("node-1-1");
        assert_eq!(Mode::PotentialDrag { target: id }.pressed_node(), Some(id));
        assert_eq!(Mode::DraggingCard { target: id }.pressed_node(), None);
        assert!(Mode::DraggingMulti.is_dragging());
    }
}
