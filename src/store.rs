//! Diagram store - the canonical in-memory document.
//!
//! Owns the node list, edge list and selection as one consistent snapshot.
//! All mutation goes through the methods below; each one leaves the store in
//! a state where:
//!
//! - every edge's `source` and `target` name an existing node,
//! - at most one edge exists per ordered `(source, target)` pair,
//! - node and edge selection are never both non-empty,
//! - the spatial index matches node positions and sizes.
//!
//! A call that changes observable state bumps [`DiagramStore::revision`] and
//! queues exactly one [`StoreEvent`]; a call that changes nothing queues
//! nothing. Renderers that measure nodes rely on this to avoid
//! measure/re-render feedback loops.

use crate::geometry::{Point, Rect};
use crate::selection::Selection;
use crate::spatial_index::SpatialIndex;
use crate::types::{Edge, EdgeDataPatch, EdgeId, Node, NodeDataPatch, NodeId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Observable change to the store.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    NodeAdded(NodeId),
    NodeMoved(NodeId),
    NodeDataChanged(NodeId),
    NodeResized(NodeId),
    /// Nodes removed together with their edges and selection entries
    NodesDeleted { nodes: Vec<NodeId>, edges: Vec<EdgeId> },
    EdgeAdded(EdgeId),
    EdgeDeleted(EdgeId),
    EdgeDataChanged(EdgeId),
    SelectionChanged,
    Cleared,
    Replaced,
}

/// What [`DiagramStore::replace_all`] had to drop to keep the invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaceReport {
    pub duplicate_nodes: usize,
    pub dangling_edges: usize,
    pub duplicate_edges: usize,
}

impl ReplaceReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_nodes == 0 && self.dangling_edges == 0 && self.duplicate_edges == 0
    }
}

#[derive(Default)]
pub struct DiagramStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selection: Selection,
    index: SpatialIndex,
    revision: u64,
    events: Vec<StoreEvent>,
}

impl DiagramStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Queries ====================

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| &e.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn has_edge_between(&self, source: &NodeId, target: &NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| &e.source == source && &e.target == target)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Monotonic counter, bumped once per observable change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Take the change events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Nodes whose bounds contain `p`, topmost (last drawn) first.
    pub fn nodes_at_point(&self, p: Point) -> Vec<NodeId> {
        let hits: HashSet<NodeId> = self.index.query_point(p).into_iter().collect();
        if hits.is_empty() {
            return Vec::new();
        }
        self.nodes
            .iter()
            .rev()
            .filter(|n| hits.contains(&n.id))
            .map(|n| n.id.clone())
            .collect()
    }

    /// Nodes intersecting `rect`, in document order.
    pub fn nodes_in_rect(&self, rect: Rect) -> Vec<NodeId> {
        let hits: HashSet<NodeId> = self.index.query_rect(rect).into_iter().collect();
        self.nodes
            .iter()
            .filter(|n| hits.contains(&n.id))
            .map(|n| n.id.clone())
            .collect()
    }

    // ==================== Nodes ====================

    /// Append a node. The caller supplies a unique id; a node whose id is
    /// already present is rejected.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.contains_node(&node.id) {
            warn!(node = %node.id, "Rejected node with duplicate id");
            return false;
        }
        debug!(node = %node.id, kind = %node.kind, "Node added");
        self.index.upsert(&node.id, node.bounds());
        let id = node.id.clone();
        self.nodes.push(node);
        self.emit(StoreEvent::NodeAdded(id));
        true
    }

    pub fn update_node_position(&mut self, id: &NodeId, position: Point) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if node.x == position.x && node.y == position.y {
            return false;
        }
        node.x = position.x;
        node.y = position.y;
        let bounds = node.bounds();
        self.index.upsert(id, bounds);
        self.emit(StoreEvent::NodeMoved(id.clone()));
        true
    }

    /// Shallow-merge `patch` into the node's data.
    pub fn update_node_data(&mut self, id: &NodeId, patch: NodeDataPatch) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if !patch.apply(&mut node.data) {
            return false;
        }
        self.emit(StoreEvent::NodeDataChanged(id.clone()));
        true
    }

    /// Record the renderer's measured size. Identical values are a silent no-op.
    pub fn update_node_dimensions(&mut self, id: &NodeId, width: f64, height: f64) -> bool {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return false;
        }
        let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if node.width == Some(width) && node.height == Some(height) {
            return false;
        }
        node.width = Some(width);
        node.height = Some(height);
        let bounds = node.bounds();
        self.index.upsert(id, bounds);
        self.emit(StoreEvent::NodeResized(id.clone()));
        true
    }

    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        self.delete_nodes(std::slice::from_ref(id))
    }

    /// Remove nodes, every edge touching them, and their selection entries in
    /// one step.
    pub fn delete_nodes(&mut self, ids: &[NodeId]) -> bool {
        let doomed: HashSet<&NodeId> = ids.iter().filter(|id| self.contains_node(id)).collect();
        if doomed.is_empty() {
            return false;
        }

        let removed_nodes: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| doomed.contains(&n.id))
            .map(|n| n.id.clone())
            .collect();
        let removed_edges: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| doomed.contains(&e.source) || doomed.contains(&e.target))
            .map(|e| e.id.clone())
            .collect();

        self.nodes.retain(|n| !doomed.contains(&n.id));
        self.edges
            .retain(|e| !doomed.contains(&e.source) && !doomed.contains(&e.target));
        for id in &removed_nodes {
            self.index.remove(id);
        }
        self.selection.remove_nodes(&removed_nodes);
        if let Some(edge_id) = self.selection.edge().cloned() {
            if removed_edges.contains(&edge_id) {
                self.selection.remove_edge(&edge_id);
            }
        }

        debug!(
            nodes = removed_nodes.len(),
            edges = removed_edges.len(),
            "Nodes deleted"
        );
        self.emit(StoreEvent::NodesDeleted {
            nodes: removed_nodes,
            edges: removed_edges,
        });
        true
    }

    // ==================== Edges ====================

    /// Append an edge unless one already joins the same `(source, target)`
    /// pair. Edges naming a missing node are rejected as well.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if self.has_edge_between(&edge.source, &edge.target) {
            debug!(source = %edge.source, target = %edge.target, "Duplicate edge ignored");
            return false;
        }
        if !self.contains_node(&edge.source) || !self.contains_node(&edge.target) {
            warn!(edge = %edge.id, "Rejected edge with missing endpoint");
            return false;
        }
        if self.edge(&edge.id).is_some() {
            warn!(edge = %edge.id, "Rejected edge with duplicate id");
            return false;
        }
        debug!(edge = %edge.id, source = %edge.source, target = %edge.target, "Edge added");
        let id = edge.id.clone();
        self.edges.push(edge);
        self.emit(StoreEvent::EdgeAdded(id));
        true
    }

    pub fn delete_edge(&mut self, id: &EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| &e.id != id);
        if self.edges.len() == before {
            return false;
        }
        self.selection.remove_edge(id);
        self.emit(StoreEvent::EdgeDeleted(id.clone()));
        true
    }

    pub fn update_edge_data(&mut self, id: &EdgeId, patch: EdgeDataPatch) -> bool {
        let Some(edge) = self.edges.iter_mut().find(|e| &e.id == id) else {
            return false;
        };
        if !patch.apply(&mut edge.data) {
            return false;
        }
        self.emit(StoreEvent::EdgeDataChanged(id.clone()));
        true
    }

    // ==================== Selection ====================

    /// Select a node, replacing the selection unless `additive`. Clears any
    /// edge selection. Unknown ids are ignored.
    pub fn select_node(&mut self, id: &NodeId, additive: bool) -> bool {
        if !self.contains_node(id) {
            return false;
        }
        if self.selection.select_node(id.clone(), additive) {
            self.emit(StoreEvent::SelectionChanged);
            true
        } else {
            false
        }
    }

    pub fn select_edge(&mut self, id: &EdgeId) -> bool {
        if self.edge(id).is_none() {
            return false;
        }
        if self.selection.select_edge(id.clone()) {
            self.emit(StoreEvent::SelectionChanged);
            true
        } else {
            false
        }
    }

    pub fn deselect_all(&mut self) -> bool {
        if self.selection.clear() {
            self.emit(StoreEvent::SelectionChanged);
            true
        } else {
            false
        }
    }

    // ==================== Bulk ====================

    /// Empty the board.
    pub fn clear(&mut self) -> bool {
        if self.nodes.is_empty() && self.edges.is_empty() && self.selection.is_empty() {
            return false;
        }
        self.nodes.clear();
        self.edges.clear();
        self.selection = Selection::None;
        self.index.clear();
        debug!("Board cleared");
        self.emit(StoreEvent::Cleared);
        true
    }

    /// Replace the whole document.
    ///
    /// Input is sanitized before it lands: later nodes reusing an earlier id,
    /// edges naming a missing node and repeated `(source, target)` pairs are
    /// dropped, so the store invariants hold for imported data too.
    pub fn replace_all(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) -> ReplaceReport {
        let mut report = ReplaceReport::default();

        let mut seen_nodes = HashSet::new();
        let nodes: Vec<Node> = nodes
            .into_iter()
            .filter(|n| {
                let fresh = seen_nodes.insert(n.id.clone());
                if !fresh {
                    report.duplicate_nodes += 1;
                }
                fresh
            })
            .collect();

        let mut seen_pairs = HashSet::new();
        let mut seen_edge_ids = HashSet::new();
        let edges: Vec<Edge> = edges
            .into_iter()
            .filter(|e| {
                if !seen_nodes.contains(&e.source) || !seen_nodes.contains(&e.target) {
                    report.dangling_edges += 1;
                    return false;
                }
                let fresh = seen_pairs.insert((e.source.clone(), e.target.clone()))
                    && seen_edge_ids.insert(e.id.clone());
                if !fresh {
                    report.duplicate_edges += 1;
                }
                fresh
            })
            .collect();

        if !report.is_clean() {
            warn!(?report, "Dropped invalid entries while replacing document");
        }

        self.index
            .rebuild(nodes.iter().map(|n| (n.id.clone(), n.bounds())));
        self.nodes = nodes;
        self.edges = edges;
        self.selection = Selection::None;
        self.emit(StoreEvent::Replaced);
        report
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.events.push(event);
    }
}
