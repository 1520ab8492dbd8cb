//! Connection routing - port anchors, edge curves, snap-to-port and edge hit testing.
//!
//! All geometry here is in world units. Edges leave a node from its output
//! anchor (right-center) and enter through its input anchor (left-center)
//! along a cubic curve whose control points sit horizontally outward from
//! each anchor:
//!
//! ```text
//! offset = max(|to.x - from.x| * factor, min_offset)
//! c1     = from + (offset, 0)
//! c2     = to   - (offset, 0)
//! ```
//!
//! The floor keeps the curve from degenerating into a straight segment when
//! both anchors share an x coordinate.

use crate::constants::{CURVE_HIT_SEGMENTS, CURVE_MIN_OFFSET, CURVE_OFFSET_FACTOR};
use crate::geometry::{Point, distance_to_segment, point2, vec2};
use crate::store::DiagramStore;
use crate::types::{EdgeId, HandleType, LinkingSource, Node, NodeId};
use std::fmt::Write as _;

// ============================================================================
// Anchors
// ============================================================================

/// Input anchor: left-center of the node's bounding box
#[inline]
pub fn input_anchor(node: &Node) -> Point {
    let size = node.size();
    point2(node.x, node.y + size.height / 2.0)
}

/// Output anchor: right-center of the node's bounding box
#[inline]
pub fn output_anchor(node: &Node) -> Point {
    let size = node.size();
    point2(node.x + size.width, node.y + size.height / 2.0)
}

#[inline]
pub fn anchor(node: &Node, handle: HandleType) -> Point {
    match handle {
        HandleType::Source => output_anchor(node),
        HandleType::Target => input_anchor(node),
    }
}

// ============================================================================
// Curves
// ============================================================================

/// Shape parameters for connection curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStyle {
    /// Control offset as a fraction of the horizontal anchor distance
    pub factor: f64,
    /// Lower bound on the control offset
    pub min_offset: f64,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            factor: CURVE_OFFSET_FACTOR,
            min_offset: CURVE_MIN_OFFSET,
        }
    }
}

impl CurveStyle {
    pub fn control_offset(&self, from: Point, to: Point) -> f64 {
        ((to.x - from.x).abs() * self.factor).max(self.min_offset)
    }
}

/// A cubic Bezier from an output anchor to an input anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionPath {
    pub from: Point,
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

impl ConnectionPath {
    pub fn between(from: Point, to: Point, style: &CurveStyle) -> Self {
        let offset = style.control_offset(from, to);
        Self {
            from,
            c1: from + vec2(offset, 0.0),
            c2: to - vec2(offset, 0.0),
            to,
        }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        point2(
            a * self.from.x + b * self.c1.x + c * self.c2.x + d * self.to.x,
            a * self.from.y + b * self.c1.y + c * self.c2.y + d * self.to.y,
        )
    }

    /// Approximate distance from `p` to the curve, using a polyline of
    /// [`CURVE_HIT_SEGMENTS`] segments.
    pub fn distance_to(&self, p: Point) -> f64 {
        let mut prev = self.from;
        let mut best = f64::INFINITY;
        for i in 1..=CURVE_HIT_SEGMENTS {
            let next = self.point_at(i as f64 / CURVE_HIT_SEGMENTS as f64);
            best = best.min(distance_to_segment(p, prev, next));
            prev = next;
        }
        best
    }

    /// SVG path data: `M x y C c1x c1y, c2x c2y, x y`
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(64);
        let _ = write!(
            d,
            "M {} {} C {} {}, {} {}, {} {}",
            self.from.x,
            self.from.y,
            self.c1.x,
            self.c1.y,
            self.c2.x,
            self.c2.y,
            self.to.x,
            self.to.y
        );
        d
    }
}

/// A committed edge ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedEdge {
    pub id: EdgeId,
    pub path: ConnectionPath,
    pub selected: bool,
}

/// Route every edge in the store from its source's output anchor to its
/// target's input anchor.
pub fn route_edges(store: &DiagramStore, style: &CurveStyle) -> Vec<RoutedEdge> {
    store
        .edges()
        .iter()
        .filter_map(|edge| {
            let source = store.node(&edge.source)?;
            let target = store.node(&edge.target)?;
            Some(RoutedEdge {
                id: edge.id.clone(),
                path: ConnectionPath::between(output_anchor(source), input_anchor(target), style),
                selected: store.selection().is_edge_selected(&edge.id),
            })
        })
        .collect()
}

// ============================================================================
// Snap-to-port
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SnapTarget {
    pub node_id: NodeId,
    pub anchor: Point,
}

/// Nearest input anchor within `threshold_px` screen pixels of `cursor`,
/// excluding the link's own source node.
///
/// Distances are measured in world units; the threshold is converted by
/// dividing by the scale `k`.
pub fn find_snap_target(
    store: &DiagramStore,
    source: &NodeId,
    cursor: Point,
    k: f64,
    threshold_px: f64,
) -> Option<SnapTarget> {
    let threshold = threshold_px / k;
    store
        .nodes()
        .iter()
        .filter(|node| &node.id != source)
        .map(|node| {
            let anchor = input_anchor(node);
            ((cursor - anchor).length(), node, anchor)
        })
        .filter(|(distance, _, _)| *distance < threshold)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, node, anchor)| SnapTarget {
            node_id: node.id.clone(),
            anchor,
        })
}

/// The in-progress connector drawn while linking.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkPreview {
    pub path: ConnectionPath,
    /// Node whose input anchor the endpoint snapped to, if any
    pub snapped_to: Option<NodeId>,
}

impl LinkPreview {
    /// Rendered endpoint: the snapped anchor or the raw cursor
    pub fn end(&self) -> Point {
        self.path.to
    }
}

pub fn link_preview(
    store: &DiagramStore,
    linking: &LinkingSource,
    cursor: Point,
    k: f64,
    threshold_px: f64,
    style: &CurveStyle,
) -> LinkPreview {
    let snap = match linking.handle_type {
        HandleType::Source => find_snap_target(store, &linking.node_id, cursor, k, threshold_px),
        HandleType::Target => None,
    };
    let (end, snapped_to) = match snap {
        Some(target) => (target.anchor, Some(target.node_id)),
        None => (cursor, None),
    };
    LinkPreview {
        path: ConnectionPath::between(linking.anchor, end, style),
        snapped_to,
    }
}

// ============================================================================
// Edge hit testing
// ============================================================================

/// Topmost edge whose widened hit stroke (`hit_width` world units wide)
/// covers `p`.
pub fn edge_at(store: &DiagramStore, p: Point, hit_width: f64, style: &CurveStyle) -> Option<EdgeId> {
    let half = hit_width / 2.0;
    route_edges(store, style)
        .into_iter()
        .rev()
        .find(|routed| routed.path.distance_to(p) <= half)
        .map(|routed| routed.id)
}
