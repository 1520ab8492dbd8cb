//! Core types for the diagram document.
//!
//! Nodes, edges and their metadata are serialized exactly as they appear in
//! exported documents (camelCase keys, `type` for the component kind), so the
//! same structs back the in-memory store and the file format.

use crate::constants::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH};
use crate::geometry::{Point, Rect, Size, point2, size2};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a node. Generated ids are UUID v4 strings; imported
/// documents may carry any unique string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

/// Identifier of an edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Generate a fresh, globally unique id.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(NodeId);
string_id!(EdgeId);

// ============================================================================
// Nodes
// ============================================================================

/// A typed service block on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Component kind: a catalog entry or a user-defined custom kind
    #[serde(rename = "type")]
    pub kind: String,
    /// World-space left edge
    pub x: f64,
    /// World-space top edge
    pub y: f64,
    /// Measured render width, absent until the renderer reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Measured render height, absent until the renderer reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn new(id: NodeId, kind: impl Into<String>, position: Point, data: NodeData) -> Self {
        Self {
            id,
            kind: kind.into(),
            x: position.x,
            y: position.y,
            width: None,
            height: None,
            data,
        }
    }

    /// World-space top-left corner
    #[inline]
    pub fn position(&self) -> Point {
        point2(self.x, self.y)
    }

    /// Measured size, or the default footprint for unmeasured dimensions
    #[inline]
    pub fn size(&self) -> Size {
        size2(
            self.width.unwrap_or(DEFAULT_NODE_WIDTH),
            self.height.unwrap_or(DEFAULT_NODE_HEIGHT),
        )
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position(), self.size())
    }
}

/// User-editable metadata of a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Display label. Older documents stored this under `title`.
    #[serde(default, alias = "title")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Key into the host's icon registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

impl NodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }
}

/// Shallow patch over [`NodeData`]. `None` leaves a field untouched;
/// `Some(None)` clears an optional field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeDataPatch {
    pub label: Option<String>,
    pub description: Option<Option<String>>,
    pub icon_name: Option<Option<String>>,
}

impl NodeDataPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn description(description: Option<String>) -> Self {
        Self {
            description: Some(description),
            ..Default::default()
        }
    }

    pub fn icon_name(icon_name: Option<String>) -> Self {
        Self {
            icon_name: Some(icon_name),
            ..Default::default()
        }
    }

    /// Merge into `data`. Returns true if any field actually changed.
    pub fn apply(self, data: &mut NodeData) -> bool {
        let mut changed = false;
        if let Some(label) = self.label {
            changed |= data.label != label;
            data.label = label;
        }
        if let Some(description) = self.description {
            changed |= data.description != description;
            data.description = description;
        }
        if let Some(icon_name) = self.icon_name {
            changed |= data.icon_name != icon_name;
            data.icon_name = icon_name;
        }
        changed
    }
}

// ============================================================================
// Edges
// ============================================================================

/// A directed connection from one node's output port to another's input port.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub data: EdgeData,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            data: EdgeData::default(),
        }
    }

    /// Create an edge with a generated id
    pub fn connect(source: NodeId, target: NodeId) -> Self {
        Self::new(EdgeId::generate(), source, target)
    }

    /// True if either endpoint is `node_id`
    #[inline]
    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Shallow patch over [`EdgeData`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeDataPatch {
    pub label: Option<Option<String>>,
    pub protocol: Option<Option<String>>,
}

impl EdgeDataPatch {
    pub fn label(label: Option<String>) -> Self {
        Self {
            label: Some(label),
            ..Default::default()
        }
    }

    pub fn protocol(protocol: Option<String>) -> Self {
        Self {
            protocol: Some(protocol),
            ..Default::default()
        }
    }

    pub fn apply(self, data: &mut EdgeData) -> bool {
        let mut changed = false;
        if let Some(label) = self.label {
            changed |= data.label != label;
            data.label = label;
        }
        if let Some(protocol) = self.protocol {
            changed |= data.protocol != protocol;
            data.protocol = protocol;
        }
        changed
    }
}

// ============================================================================
// Transient Interaction Types
// ============================================================================

/// Which side of a node a port handle sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleType {
    /// Output port, right-center of the node
    Source,
    /// Input port, left-center of the node
    Target,
}

/// A connection being drawn from a node's output port.
///
/// `anchor` is the port position at the moment linking started; it is not
/// re-derived if the node later moves.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkingSource {
    pub node_id: NodeId,
    pub handle_type: HandleType,
    pub anchor: Point,
}

/// Last known pointer position in both coordinate spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorPosition {
    pub screen: Point,
    pub world: Point,
}
