//! Hit testing - classify what lies under a world-space point.
//!
//! Priority mirrors how the canvas layers stack: port handles sit above node
//! bodies, node bodies above edges, and edges above the background. The first
//! layer with a hit consumes the pointer-down.

use crate::geometry::Point;
use crate::routing::{CurveStyle, edge_at, input_anchor, output_anchor};
use crate::settings::EditorSettings;
use crate::store::DiagramStore;
use crate::types::{EdgeId, HandleType, NodeId};

#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget {
    /// A port handle on a node
    Port { node_id: NodeId, handle: HandleType },
    /// A node body
    Node(NodeId),
    /// An edge's widened hit region
    Edge(EdgeId),
    /// Empty canvas
    Background,
}

#[derive(Clone, Debug)]
pub struct HitTester {
    /// Port handle radius in screen pixels
    pub port_radius_px: f64,
    /// Edge hit stroke width in world units
    pub edge_hit_width: f64,
    pub curve_style: CurveStyle,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::from_settings(&EditorSettings::default())
    }
}

impl HitTester {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            port_radius_px: settings.port_hit_radius_px,
            edge_hit_width: settings.edge_hit_width,
            curve_style: settings.curve_style(),
        }
    }

    /// Classify `p` (world units) at scale `k`.
    pub fn hit_test(&self, store: &DiagramStore, p: Point, k: f64) -> HitTarget {
        if let Some((node_id, handle)) = self.port_at(store, p, k) {
            return HitTarget::Port { node_id, handle };
        }
        if let Some(node_id) = store.nodes_at_point(p).into_iter().next() {
            return HitTarget::Node(node_id);
        }
        if let Some(edge_id) = edge_at(store, p, self.edge_hit_width, &self.curve_style) {
            return HitTarget::Edge(edge_id);
        }
        HitTarget::Background
    }

    /// Closest port handle within the handle radius, topmost node first on ties.
    pub fn port_at(&self, store: &DiagramStore, p: Point, k: f64) -> Option<(NodeId, HandleType)> {
        let radius = self.port_radius_px / k;
        let mut best: Option<(f64, NodeId, HandleType)> = None;
        for node in store.nodes().iter().rev() {
            for (handle, anchor) in [
                (HandleType::Source, output_anchor(node)),
                (HandleType::Target, input_anchor(node)),
            ] {
                let distance = (p - anchor).length();
                if distance <= radius && best.as_ref().is_none_or(|(d, _, _)| distance < *d) {
                    best = Some((distance, node.id.clone(), handle));
                }
            }
        }
        best.map(|(_, id, handle)| (id, handle))
    }
}
