//! Core diagram data model: nodes, connections, and the entity store.
//!
//! The [`Document`] is the single source of truth mutated by the interaction
//! engine. It is deliberately a bag of public, directly mutable collections:
//! callers (the editor and the connection builder) enforce the invariants,
//! the store itself does not validate writes.

use crate::geometry::{AnchorSide, ParseKindError, Point, Rect};
use crate::id::{ConnectionId, NodeId};
use crate::layout::Layout;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Node ────────────────────────────────────────────────────────────────

/// Node type. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// A process step; clicking it opens the comparison detail view.
    #[default]
    Process,
    /// A junction; inert on click.
    Hub,
    /// A method; clicking it toggles the method filter.
    Method,
}

impl NodeType {
    /// Chart-space height of a card of this type. Width is stored per node.
    pub const fn height(self) -> f32 {
        match self {
            NodeType::Process | NodeType::Hub => 100.0,
            NodeType::Method => 80.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Process => "process",
            NodeType::Hub => "hub",
            NodeType::Method => "method",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "process" => Ok(NodeType::Process),
            "hub" => Ok(NodeType::Hub),
            "method" => Ok(NodeType::Method),
            _ => Err(ParseKindError {
                what: "node type",
                value: s.to_string(),
            }),
        }
    }
}

/// A positioned diagram element. `x`/`y` is the top-left corner in chart space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type", default)]
    pub kind: NodeType,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeType, name: impl Into<String>, x: f32, y: f32, width: f32) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            x,
            y,
            width,
        }
    }

    pub fn height(&self) -> f32 {
        self.kind.height()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height())
    }

    /// Chart-space coordinate of the given anchor side.
    pub fn anchor(&self, side: AnchorSide) -> Point {
        side.point_on(&self.bounds())
    }

    /// Shift the node by a chart-space delta. Non-finite deltas are dropped
    /// so the position stays finite.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.x += dx;
            self.y += dy;
        }
    }
}

// ─── Connection ──────────────────────────────────────────────────────────

fn default_from_pos() -> AnchorSide {
    AnchorSide::Right
}

fn default_to_pos() -> AnchorSide {
    AnchorSide::Left
}

/// A directed edge between anchor points on two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_from_pos")]
    pub from_pos: AnchorSide,
    #[serde(default = "default_to_pos")]
    pub to_pos: AnchorSide,
}

impl Connection {
    pub fn new(id: ConnectionId, from: NodeId, to: NodeId, from_pos: AnchorSide, to_pos: AnchorSide) -> Self {
        Self {
            id,
            from,
            to,
            from_pos,
            to_pos,
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

// ─── Document (entity store) ─────────────────────────────────────────────

/// In-memory diagram state: nodes, connections, and transient selection.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Node mapping in insertion order (render and export order).
    pub nodes: IndexMap<NodeId, Node>,
    /// Connection records. Dangling endpoints are tolerated.
    pub connections: Vec<Connection>,
    /// Committed multi-selection. Not persisted.
    pub selection: IndexSet<NodeId>,
    /// Nodes flagged by a live rubber band, not yet committed.
    pub preview: IndexSet<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: Layout) -> Self {
        Self {
            nodes: layout.nodes,
            connections: layout.connections,
            ..Self::default()
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Insert (or replace) a node keyed by its own ID.
    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id, node)
    }

    /// Remove a node, every connection touching it, and any selection state.
    pub fn remove_node_cascade(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.shift_remove(&id)?;
        self.connections.retain(|c| !c.touches(id));
        self.selection.shift_remove(&id);
        self.preview.shift_remove(&id);
        Some(removed)
    }

    pub fn has_connection(&self, from: NodeId, to: NodeId) -> bool {
        self.connections.iter().any(|c| c.from == from && c.to == to)
    }

    /// Append a new connection unless it would loop or duplicate an existing
    /// `(from, to)` pair. Returns the new connection's ID.
    pub fn connect(
        &mut self,
        from: NodeId,
        from_pos: AnchorSide,
        to: NodeId,
        to_pos: AnchorSide,
    ) -> Option<ConnectionId> {
        if from == to || self.has_connection(from, to) {
            return None;
        }
        let id = ConnectionId::generate("c");
        self.connections
            .push(Connection::new(id, from, to, from_pos, to_pos));
        Some(id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let pos = self.connections.iter().position(|c| c.id == id)?;
        Some(self.connections.remove(pos))
    }

    /// Both endpoints of a connection, or `None` if either is missing.
    pub fn endpoints(&self, conn: &Connection) -> Option<(&Node, &Node)> {
        Some((self.nodes.get(&conn.from)?, self.nodes.get(&conn.to)?))
    }

    /// IDs of every node whose bounds intersect `rect`, in node order.
    pub fn nodes_in_rect(&self, rect: &Rect) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.bounds().intersects(rect))
            .map(|n| n.id)
            .collect()
    }

    pub fn select_all(&mut self) {
        self.selection.extend(self.nodes.keys().copied());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selection.contains(&id)
    }

    /// Deep copy of the persistent part of the document.
    pub fn layout(&self) -> Layout {
        Layout {
            nodes: self.nodes.clone(),
            connections: self.connections.clone(),
        }
    }

    /// Replace nodes and connections wholesale. Selection entries that no
    /// longer name a node are dropped.
    pub fn restore(&mut self, layout: Layout) {
        self.nodes = layout.nodes;
        self.connections = layout.connections;
        let nodes = &self.nodes;
        self.selection.retain(|id| nodes.contains_key(id));
        self.preview.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc_with(ids: &[&str]) -> Document {
        let mut doc = Document::new();
        for (i, id) in ids.iter().enumerate() {
            doc.insert_node(Node::new(
                NodeId::intern(id),
                NodeType::Process,
                *id,
                i as f32 * 300.0,
                0.0,
                260.0,
            ));
        }
        doc
    }

    #[test]
    fn height_lookup_by_type() {
        assert_eq!(NodeType::Process.height(), 100.0);
        assert_eq!(NodeType::Hub.height(), 100.0);
        assert_eq!(NodeType::Method.height(), 80.0);
    }

    #[test]
    fn connect_rejects_duplicates_and_loops() {
        let mut doc = doc_with(&["m_a", "m_b"]);
        let (a, b) = (NodeId::intern("m_a"), NodeId::intern("m_b"));

        assert!(doc.connect(a, AnchorSide::Right, b, AnchorSide::Left).is_some());
        assert!(doc.connect(a, AnchorSide::Bottom, b, AnchorSide::Top).is_none());
        assert!(doc.connect(b, AnchorSide::Right, a, AnchorSide::Left).is_some());
        assert!(doc.connect(a, AnchorSide::Right, a, AnchorSide::Left).is_none());
        assert_eq!(doc.connections.len(), 2);
    }

    #[test]
    fn cascade_removes_connections_and_selection() {
        let mut doc = doc_with(&["m_x", "m_y", "m_z"]);
        let (x, y, z) = (NodeId::intern("m_x"), NodeId::intern("m_y"), NodeId::intern("m_z"));
        doc.connect(x, AnchorSide::Right, y, AnchorSide::Left);
        doc.connect(z, AnchorSide::Right, x, AnchorSide::Left);
        doc.connect(y, AnchorSide::Right, z, AnchorSide::Left);
        doc.selection.insert(x);
        doc.selection.insert(y);

        let removed = doc.remove_node_cascade(x);
        assert!(removed.is_some());
        assert_eq!(doc.connections.len(), 1);
        assert!(doc.connections.iter().all(|c| !c.touches(x)));
        assert_eq!(doc.selection.iter().copied().collect::<Vec<_>>(), vec![y]);
    }

    #[test]
    fn missing_positions_default_to_right_left() {
        let conn: Connection =
            serde_json::from_str(r#"{"id":"c1","from":"node-1-1","to":"node-1-2"}"#).unwrap();
        assert_eq!(conn.from_pos, AnchorSide::Right);
        assert_eq!(conn.to_pos, AnchorSide::Left);
    }

    #[test]
    fn translate_ignores_non_finite_delta() {
        let mut node = Node::new(NodeId::intern("m_t"), NodeType::Hub, "t", 1.0, 2.0, 100.0);
        node.translate(f32::NAN, 3.0);
        assert_eq!(node.position(), Point::new(1.0, 2.0));
        node.translate(4.0, 3.0);
        assert_eq!(node.position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn restore_prunes_stale_selection() {
        let mut doc = doc_with(&["m_p", "m_q"]);
        let before = doc.layout();
        let extra = NodeId::intern("m_r");
        doc.insert_node(Node::new(extra, NodeType::Method, "r", 0.0, 500.0, 200.0));
        doc.selection.insert(extra);
        doc.selection.insert(NodeId::intern("m_p"));

        doc.restore(before);
        assert!(!doc.contains_node(extra));
        assert_eq!(doc.selection.len(), 1);
    }
}
