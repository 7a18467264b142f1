//! Connector geometry: anchor-to-anchor cubic S-curves.
//!
//! Both control points sit on the vertical line through the horizontal
//! midpoint, so every curve leaves and enters horizontally regardless of the
//! vertical distance between its ends.

use kriter_core::{ConnectionId, Document, Point};
use kurbo::{CubicBez, ParamCurveNearest};
use std::fmt::Write as _;

/// Resolved on-screen geometry of one persistent connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorPath {
    pub id: ConnectionId,
    pub from: Point,
    pub to: Point,
}

impl ConnectorPath {
    /// X coordinate shared by both control points.
    pub fn mid_x(&self) -> f32 {
        self.from.x + (self.to.x - self.from.x) / 2.0
    }

    pub fn control_points(&self) -> (Point, Point) {
        let mid = self.mid_x();
        (Point::new(mid, self.from.y), Point::new(mid, self.to.y))
    }

    pub fn cubic(&self) -> CubicBez {
        let (c1, c2) = self.control_points();
        CubicBez::new(kp(self.from), kp(c1), kp(c2), kp(self.to))
    }

    /// SVG path data: `M x y C c1x c1y, c2x c2y, x y`.
    pub fn svg_data(&self) -> String {
        let (c1, c2) = self.control_points();
        let mut d = String::with_capacity(64);
        let _ = write!(
            d,
            "M {} {} C {} {}, {} {}, {} {}",
            self.from.x, self.from.y, c1.x, c1.y, c2.x, c2.y, self.to.x, self.to.y
        );
        d
    }

    /// Distance from `p` to the nearest point on the curve.
    pub fn distance_to(&self, p: Point) -> f32 {
        let nearest = self.cubic().nearest(kp(p), 1e-3);
        nearest.distance_sq.sqrt() as f32
    }
}

fn kp(p: Point) -> kurbo::Point {
    kurbo::Point::new(f64::from(p.x), f64::from(p.y))
}

/// Geometry for every connection whose endpoints both exist.
/// Dangling connections are skipped, not removed.
pub fn connector_paths(doc: &Document) -> Vec<ConnectorPath> {
    doc.connections
        .iter()
        .filter_map(|conn| {
            let Some((from, to)) = doc.endpoints(conn) else {
                log::trace!("skip dangling connection {:?}", conn.id);
                return None;
            };
            Some(ConnectorPath {
                id: conn.id,
                from: from.anchor(conn.from_pos),
                to: to.anchor(conn.to_pos),
            })
        })
        .collect()
}

/// The connection closest to `p` within `tolerance` chart units.
/// Used to resolve a contextual (right-click) delete.
pub fn connection_at(paths: &[ConnectorPath], p: Point, tolerance: f32) -> Option<ConnectionId> {
    paths
        .iter()
        .map(|path| (path.id, path.distance_to(p)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kriter_core::defaults::default_workflow;
    use kriter_core::{AnchorSide, NodeId};
    use kurbo::ParamCurve;
    use pretty_assertions::assert_eq;

    #[test]
    fn svg_data_matches_midpoint_s_curve() {
        let path = ConnectorPath {
            id: ConnectionId::intern("c-svg"),
            from: Point::new(310.0, 410.0),
            to: Point::new(350.0, 410.0),
        };
        assert_eq!(path.svg_data(), "M 310 410 C 330 410, 330 410, 350 410");
    }

    #[test]
    fn tangents_are_horizontal_at_both_ends() {
        let path = ConnectorPath {
            id: ConnectionId::intern("c-tan"),
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 400.0),
        };
        let (c1, c2) = path.control_points();
        assert_eq!(c1.y, path.from.y);
        assert_eq!(c2.y, path.to.y);
        let end = path.cubic().eval(1.0);
        assert!((end.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn dangling_connections_are_skipped() {
        let mut doc = default_workflow();
        let total = doc.connections.len();
        doc.nodes.shift_remove(&NodeId::intern("node-2-4"));

        let paths = connector_paths(&doc);
        assert_eq!(paths.len(), total - 1);
        assert_eq!(doc.connections.len(), total, "records stay in the store");
    }

    #[test]
    fn paths_use_stored_anchor_sides() {
        let mut doc = default_workflow();
        doc.connections[0].from_pos = AnchorSide::Bottom;
        let paths = connector_paths(&doc);
        let from = doc.node(NodeId::intern("node-1-1")).unwrap();
        assert_eq!(paths[0].from, from.anchor(AnchorSide::Bottom));
    }

    #[test]
    fn connection_at_picks_nearest_within_tolerance() {
        let doc = default_workflow();
        let paths = connector_paths(&doc);
        // Midpoint of c1 (node-1-1 right → node-1-2 left) is on the straight segment.
        let hit = connection_at(&paths, Point::new(330.0, 412.0), 4.0);
        assert_eq!(hit, Some(ConnectionId::intern("c1")));
        assert_eq!(connection_at(&paths, Point::new(-500.0, -500.0), 4.0), None);
    }
}
