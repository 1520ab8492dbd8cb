//! R-tree over node bounding boxes in world coordinates.
//!
//! Point queries back node-body hit testing; rectangle queries back
//! viewport culling for hosts.

use crate::geometry::{Point, Rect};
use crate::types::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's bounding box as stored in the tree.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, bounds: Rect) -> Self {
        Self {
            node_id,
            min_x: bounds.min_x(),
            min_y: bounds.min_y(),
            max_x: bounds.max_x(),
            max_y: bounds.max_y(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    #[inline]
    fn same_box(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.min_y == other.min_y
            && self.max_x == other.max_x
            && self.max_y == other.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for diagram nodes using an R-tree.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spatial index from `(id, bounds)` pairs.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(nodes);
        index
    }

    /// Insert or move a node's bounding box.
    pub fn upsert(&mut self, node_id: &NodeId, bounds: Rect) {
        let entry = SpatialEntry::new(node_id.clone(), bounds);
        if let Some(old) = self.entries.get(node_id) {
            if old.same_box(&entry) {
                return;
            }
            let old = old.clone();
            self.tree.remove(&old);
        }
        self.tree.insert(entry.clone());
        self.entries.insert(node_id.clone(), entry);
    }

    pub fn remove(&mut self, node_id: &NodeId) -> bool {
        if let Some(entry) = self.entries.remove(node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All nodes whose bounds contain `p` (inclusive edges), in no particular order.
    pub fn query_point(&self, p: Point) -> Vec<NodeId> {
        let envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p.x, p.y))
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    /// All nodes whose bounds intersect `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        let envelope = AABB::from_corners(
            [rect.min_x(), rect.min_y()],
            [rect.max_x(), rect.max_y()],
        );

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = (NodeId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .into_iter()
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.node_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
