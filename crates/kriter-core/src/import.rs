//! Node configuration rows: the tabular node/connection sheet exchanged with
//! spreadsheets.
//!
//! Reading and writing the spreadsheet itself happens elsewhere; this module
//! only maps already-decoded rows onto a [`Document`] and back.

use crate::geometry::AnchorSide;
use crate::id::NodeId;
use crate::model::{Document, Node, NodeType};
use serde::{Deserialize, Serialize};

/// Width given to nodes that first appear in an imported configuration.
pub const IMPORTED_NODE_WIDTH: f32 = 260.0;

/// One row of the node configuration sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfigRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<NodeType>,
    pub x: f32,
    pub y: f32,
    /// Comma-separated IDs of outgoing connection targets.
    pub connections: String,
}

/// What an import changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub connections: usize,
}

impl ImportSummary {
    pub fn is_empty(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.connections == 0
    }
}

/// Apply configuration rows to the document.
///
/// Existing nodes take the row's name and any non-zero coordinate; unknown
/// IDs with a name become new nodes. Listed targets gain a `right → left`
/// connection unless that pair already exists.
pub fn import_node_config(doc: &mut Document, rows: &[NodeConfigRow]) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for row in rows {
        let id_str = row.id.trim();
        if id_str.is_empty() {
            continue;
        }
        let id = NodeId::intern(id_str);
        let name = row.name.trim();
        let x = if row.x.is_finite() { row.x } else { 0.0 };
        let y = if row.y.is_finite() { row.y } else { 0.0 };

        if let Some(node) = doc.node_mut(id) {
            if x != 0.0 {
                node.x = x;
            }
            if y != 0.0 {
                node.y = y;
            }
            if !name.is_empty() {
                node.name = name.to_string();
            }
            summary.updated += 1;
        } else if !name.is_empty() {
            doc.insert_node(Node::new(
                id,
                row.kind.unwrap_or_default(),
                name,
                x,
                y,
                IMPORTED_NODE_WIDTH,
            ));
            summary.created += 1;
        }

        for target in row.connections.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let to = NodeId::intern(target);
            if doc
                .connect(id, AnchorSide::Right, to, AnchorSide::Left)
                .is_some()
            {
                summary.connections += 1;
            }
        }
    }

    log::info!(
        "node config import: {} created, {} updated, {} connections",
        summary.created,
        summary.updated,
        summary.connections
    );
    summary
}

/// One row per node, in node order, with rounded coordinates.
pub fn export_node_config(doc: &Document) -> Vec<NodeConfigRow> {
    doc.nodes
        .values()
        .map(|node| NodeConfigRow {
            id: node.id.as_str().to_string(),
            name: node.name.clone(),
            kind: Some(node.kind),
            x: node.x.round(),
            y: node.y.round(),
            connections: doc
                .connections
                .iter()
                .filter(|c| c.from == node.id)
                .map(|c| c.to.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}
