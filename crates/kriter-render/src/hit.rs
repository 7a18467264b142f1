//! Hit testing: chart point → what is under it.
//!
//! Walks nodes back-to-front (last inserted is drawn on top). Anchor dots
//! straddle the card edge, so they are checked before the card body.

use kriter_core::{AnchorSide, Document, NodeId, Point};

/// Radius (chart units) around an anchor point that counts as a hit.
pub const ANCHOR_HIT_RADIUS: f32 = 6.0;

/// Which part of a node card was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePart {
    /// The card itself (header, body, padding).
    Body,
    /// A connection anchor dot.
    Anchor(AnchorSide),
    /// The hover rename/delete buttons.
    Actions,
    /// A sub-element with its own click handling (service tags, expand toggle).
    Interactive,
}

/// Pointer target resolved by the host or by [`hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Empty canvas background.
    #[default]
    Canvas,
    Node { id: NodeId, part: NodePart },
}

impl Target {
    pub fn body(id: NodeId) -> Self {
        Target::Node {
            id,
            part: NodePart::Body,
        }
    }

    pub fn anchor(id: NodeId, side: AnchorSide) -> Self {
        Target::Node {
            id,
            part: NodePart::Anchor(side),
        }
    }

    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Target::Node { id, .. } => Some(*id),
            Target::Canvas => None,
        }
    }

    pub fn anchor_side(&self) -> Option<AnchorSide> {
        match self {
            Target::Node {
                part: NodePart::Anchor(side),
                ..
            } => Some(*side),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Target::Node {
                part: NodePart::Interactive,
                ..
            }
        )
    }
}

/// Find the topmost target at chart position `p`.
///
/// Geometry alone can only tell anchors from bodies; hosts that render
/// action buttons or interactive sub-elements refine the result themselves.
pub fn hit_test(doc: &Document, p: Point) -> Target {
    for node in doc.nodes.values().rev() {
        for side in AnchorSide::ALL {
            if node.anchor(side).distance(p) <= ANCHOR_HIT_RADIUS {
                return Target::anchor(node.id, side);
            }
        }
        if node.bounds().contains(p) {
            return Target::body(node.id);
        }
    }
    Target::Canvas
}
