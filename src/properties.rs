//! Properties panel boundary.
//!
//! The panel shows the current selection (one node or one edge) and sends
//! back field edits and actions. With several nodes selected the panel
//! shows the first one.

use crate::editor::Editor;
use crate::input::Effect;
use crate::types::{Edge, EdgeDataPatch, EdgeId, Node, NodeDataPatch, NodeId};

/// What the panel should display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertiesView<'a> {
    Empty,
    Node(&'a Node),
    Edge(&'a Edge),
}

/// A field-level edit from the panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyEdit {
    Node(NodeDataPatch),
    Edge(EdgeDataPatch),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelAction {
    /// Patch the displayed item
    Edit(PropertyEdit),
    /// Delete the displayed item and close the panel
    Delete,
    /// Deselect everything
    Close,
}

impl Editor {
    pub fn properties_view(&self) -> PropertiesView<'_> {
        let selection = self.store.selection();
        if let Some(node) = selection.nodes().first().and_then(|id| self.store.node(id)) {
            return PropertiesView::Node(node);
        }
        if let Some(edge) = selection.edge().and_then(|id| self.store.edge(id)) {
            return PropertiesView::Edge(edge);
        }
        PropertiesView::Empty
    }

    /// Apply a panel action to whatever the panel currently shows.
    pub fn apply_panel_action(&mut self, action: PanelAction) -> Vec<Effect> {
        let shown = match self.properties_view() {
            PropertiesView::Empty => None,
            PropertiesView::Node(node) => Some(Shown::Node(node.id.clone())),
            PropertiesView::Edge(edge) => Some(Shown::Edge(edge.id.clone())),
        };
        let changed = match (action, shown) {
            (PanelAction::Close, _) => self.store.deselect_all(),
            (_, None) => false,
            (PanelAction::Edit(PropertyEdit::Node(patch)), Some(Shown::Node(id))) => {
                self.update_node_data(&id, patch)
            }
            (PanelAction::Edit(PropertyEdit::Edge(patch)), Some(Shown::Edge(id))) => {
                self.update_edge_data(&id, patch)
            }
            (PanelAction::Edit(_), Some(_)) => false,
            (PanelAction::Delete, Some(Shown::Node(id))) => return self.delete_node(&id),
            (PanelAction::Delete, Some(Shown::Edge(id))) => return self.delete_edge(&id),
        };
        if changed {
            vec![Effect::Render]
        } else {
            Vec::new()
        }
    }

    pub fn update_node_data(&mut self, id: &NodeId, patch: NodeDataPatch) -> bool {
        self.store.update_node_data(id, patch)
    }

    pub fn update_edge_data(&mut self, id: &EdgeId, patch: EdgeDataPatch) -> bool {
        self.store.update_edge_data(id, patch)
    }

    /// Delete one node with its edges, then clear the selection.
    pub fn delete_node(&mut self, id: &NodeId) -> Vec<Effect> {
        if !self.store.delete_node(id) {
            return Vec::new();
        }
        self.store.deselect_all();
        let mut effects = self.reconcile_input();
        effects.push(Effect::Render);
        effects
    }

    pub fn delete_edge(&mut self, id: &EdgeId) -> Vec<Effect> {
        if !self.store.delete_edge(id) {
            return Vec::new();
        }
        self.store.deselect_all();
        vec![Effect::Render]
    }

    pub fn deselect_all(&mut self) -> bool {
        self.store.deselect_all()
    }
}

enum Shown {
    Node(NodeId),
    Edge(EdgeId),
}
