//! Selection state - a set of nodes or a single edge, never both.

use crate::types::{EdgeId, NodeId};

/// Current selection.
///
/// Node and edge selection are mutually exclusive by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// One or more selected nodes, without duplicates
    Nodes(Vec<NodeId>),
    /// A single selected edge
    Edge(EdgeId),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Selected node ids (empty when an edge or nothing is selected)
    pub fn nodes(&self) -> &[NodeId] {
        match self {
            Self::Nodes(ids) => ids,
            _ => &[],
        }
    }

    pub fn edge(&self) -> Option<&EdgeId> {
        match self {
            Self::Edge(id) => Some(id),
            _ => None,
        }
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes().contains(id)
    }

    pub fn is_edge_selected(&self, id: &EdgeId) -> bool {
        self.edge() == Some(id)
    }

    /// Select `id`, either replacing the selection or adding to the node set.
    /// Any edge selection is dropped. Returns true if the selection changed.
    pub fn select_node(&mut self, id: NodeId, additive: bool) -> bool {
        match self {
            Self::Nodes(ids) if additive => {
                if ids.contains(&id) {
                    return false;
                }
                ids.push(id);
                true
            }
            Self::Nodes(ids) if ids.len() == 1 && ids[0] == id => false,
            _ => {
                *self = Self::Nodes(vec![id]);
                true
            }
        }
    }

    pub fn select_edge(&mut self, id: EdgeId) -> bool {
        if self.edge() == Some(&id) {
            return false;
        }
        *self = Self::Edge(id);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        *self = Self::None;
        true
    }

    /// Drop the given nodes from the selection. Returns true if anything was removed.
    pub fn remove_nodes(&mut self, removed: &[NodeId]) -> bool {
        let Self::Nodes(ids) = self else {
            return false;
        };
        let before = ids.len();
        ids.retain(|id| !removed.contains(id));
        let changed = ids.len() != before;
        if ids.is_empty() {
            *self = Self::None;
        }
        changed
    }

    /// Drop the edge selection if it refers to `id`.
    pub fn remove_edge(&mut self, id: &EdgeId) -> bool {
        if self.is_edge_selected(id) {
            *self = Self::None;
            true
        } else {
            false
        }
    }
}
