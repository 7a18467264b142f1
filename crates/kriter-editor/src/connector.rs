//! Connection builder: anchor-to-anchor drawing while connection mode is on.
//!
//! ```text
//! Idle ──start(anchor)──▶ AwaitingEndpoint ──finish(..)──▶ Idle (mode off)
//! ```
//!
//! The builder only tracks the gesture. It never writes to the document;
//! `finish` hands back a [`ConnectRequest`] for the editor to apply.

use kriter_core::{AnchorSide, Document, NodeId, Point};
use kriter_render::Target;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ConnectorState {
    #[default]
    Idle,
    AwaitingEndpoint {
        pointer_id: u32,
        from: NodeId,
        side: AnchorSide,
        /// Chart-space cursor, end of the transient line.
        cursor: Point,
    },
}

/// A validated endpoint pair, ready to become a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectRequest {
    pub from: NodeId,
    pub from_pos: AnchorSide,
    pub to: NodeId,
    pub to_pos: AnchorSide,
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionBuilder {
    active: bool,
    state: ConnectorState,
}

impl ConnectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether connection mode is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> ConnectorState {
        self.state
    }

    /// Whether a transient line is being drawn by `pointer_id`.
    pub fn is_tracking(&self, pointer_id: u32) -> bool {
        matches!(
            self.state,
            ConnectorState::AwaitingEndpoint { pointer_id: p, .. } if p == pointer_id
        )
    }

    /// Turn connection mode on or off. Turning it off drops any gesture.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.state = ConnectorState::Idle;
        }
        log::debug!("connection mode {}", if active { "on" } else { "off" });
    }

    pub fn toggle(&mut self) -> bool {
        self.set_active(!self.active);
        self.active
    }

    /// Pointer-down on an anchor. Ignored unless the mode is on and the
    /// anchor belongs to a node in `doc`.
    pub fn start(&mut self, doc: &Document, pointer_id: u32, target: Target, cursor: Point) -> bool {
        if !self.active {
            return false;
        }
        let (Some(from), Some(side)) = (target.node_id(), target.anchor_side()) else {
            return false;
        };
        if !doc.contains_node(from) {
            log::debug!("connector: ignore anchor of unknown node {from:?}");
            return false;
        }
        log::debug!("connector: start at {from:?} {side}");
        self.state = ConnectorState::AwaitingEndpoint {
            pointer_id,
            from,
            side,
            cursor,
        };
        true
    }

    /// Move the free end of the transient line.
    pub fn track(&mut self, cursor: Point) -> bool {
        match &mut self.state {
            ConnectorState::AwaitingEndpoint { cursor: c, .. } => {
                *c = cursor;
                true
            }
            ConnectorState::Idle => false,
        }
    }

    /// End the gesture. Both outcomes reset to `Idle` and leave connection
    /// mode; only a release on a different node's anchor yields a request.
    /// Returns `None` if no gesture was in progress.
    pub fn finish(&mut self, target: Target) -> Option<Option<ConnectRequest>> {
        let ConnectorState::AwaitingEndpoint { from, side, .. } = self.state else {
            return None;
        };
        self.set_active(false);

        let request = match (target.node_id(), target.anchor_side()) {
            (Some(to), Some(to_pos)) if to != from => Some(ConnectRequest {
                from,
                from_pos: side,
                to,
                to_pos,
            }),
            _ => {
                log::debug!("connector: aborted over {target:?}");
                None
            }
        };
        Some(request)
    }

    /// Transient line from the source anchor to the cursor, in chart space.
    pub fn temp_line(&self, doc: &Document) -> Option<(Point, Point)> {
        let ConnectorState::AwaitingEndpoint {
            from, side, cursor, ..
        } = self.state
        else {
            return None;
        };
        let start = doc.node(from)?.anchor(side);
        Some((start, cursor))
    }
}
