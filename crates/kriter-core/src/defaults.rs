//! Built-in starting workflow shown before any layout has been saved.

use crate::geometry::AnchorSide;
use crate::id::{ConnectionId, NodeId};
use crate::model::{Connection, Document, Node, NodeType};

const NODES: &[(&str, NodeType, &str, f32, f32, f32)] = &[
    ("node-1-1", NodeType::Process, "ÖN KOŞULLAR", 50.0, 360.0, 260.0),
    ("node-1-2", NodeType::Process, "SOSYOEKONOMİK DEĞERLENDİRME", 350.0, 360.0, 260.0),
    ("node-1-3a", NodeType::Process, "KONTENJAN SINIRI", 700.0, 260.0, 260.0),
    ("node-1-3b", NodeType::Process, "KRİTER SINIRI", 700.0, 460.0, 260.0),
    ("node-1-4", NodeType::Hub, "YÖNTEM", 1050.0, 360.0, 100.0),
    ("node-2-1a", NodeType::Method, "Puanlı Yerleştirme", 1350.0, 160.0, 200.0),
    ("node-2-1b", NodeType::Method, "Gelir Sıralaması", 1350.0, 240.0, 200.0),
    ("node-2-2", NodeType::Method, "Kuyruk Modeli", 1350.0, 320.0, 200.0),
    ("node-2-3", NodeType::Method, "Hak Modeli", 1350.0, 400.0, 200.0),
    ("node-2-4", NodeType::Method, "Uzman Görüşü", 1350.0, 480.0, 200.0),
];

const CONNECTIONS: &[(&str, &str, &str)] = &[
    ("c1", "node-1-1", "node-1-2"),
    ("c2", "node-1-2", "node-1-3a"),
    ("c3", "node-1-2", "node-1-3b"),
    ("c4", "node-1-3a", "node-1-4"),
    ("c5", "node-1-3b", "node-1-4"),
    ("c6", "node-1-4", "node-2-1a"),
    ("c7", "node-1-4", "node-2-1b"),
    ("c8", "node-1-4", "node-2-2"),
    ("c9", "node-1-4", "node-2-3"),
    ("c10", "node-1-4", "node-2-4"),
];

/// The default criteria workflow: five process/hub steps feeding five methods.
pub fn default_workflow() -> Document {
    let mut doc = Document::new();
    for &(id, kind, name, x, y, width) in NODES {
        doc.insert_node(Node::new(NodeId::intern(id), kind, name, x, y, width));
    }
    doc.connections = CONNECTIONS
        .iter()
        .map(|&(id, from, to)| {
            Connection::new(
                ConnectionId::intern(id),
                NodeId::intern(from),
                NodeId::intern(to),
                AnchorSide::Right,
                AnchorSide::Left,
            )
        })
        .collect();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_workflow_has_no_dangling_connections() {
        let doc = default_workflow();
        assert_eq!(doc.nodes.len(), 10);
        assert_eq!(doc.connections.len(), 10);
        assert!(doc.connections.iter().all(|c| doc.endpoints(c).is_some()));
    }
}
