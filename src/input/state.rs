//! Input state machine - the current interaction mode and its payload.
//!
//! Exactly one mode is active. Everything a gesture needs to resume on the
//! next event lives in the mode's payload.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning        (pointer down on background)
//! Idle -> DraggingNode   (pointer down on a node body)
//! Idle -> Linking        (pointer down on an output port)
//!
//! Panning/DraggingNode -> Idle   (pointer up or leave)
//! Linking -> Idle                (pointer down on another node's input port: commit)
//! Linking -> Idle                (pointer down on background, or Escape: cancel)
//! ```

use crate::geometry::Point;
use crate::input::events::PointerId;
use crate::types::{LinkingSource, NodeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        pointer_id: PointerId,
        /// Previous sample; deltas are incremental
        last_pos: Point,
    },

    /// Dragging a single node
    DraggingNode {
        pointer_id: PointerId,
        node_id: NodeId,
        /// Pointer page position at drag start
        start_pointer: Point,
        /// Node world position at drag start
        start_node: Point,
    },

    /// Drawing a connection from an output port
    Linking { source: LinkingSource },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    pub fn is_linking(&self) -> bool {
        matches!(self, Self::Linking { .. })
    }

    /// Pointer captured by the active gesture, if any
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self {
            Self::Panning { pointer_id, .. } | Self::DraggingNode { pointer_id, .. } => {
                Some(*pointer_id)
            }
            _ => None,
        }
    }

    pub fn dragged_node_id(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    pub fn linking(&self) -> Option<&LinkingSource> {
        match self {
            Self::Linking { source } => Some(source),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pointer_id: PointerId, pos: Point) {
        *self = Self::Panning {
            pointer_id,
            last_pos: pos,
        };
    }

    pub fn start_dragging(
        &mut self,
        pointer_id: PointerId,
        node_id: NodeId,
        start_pointer: Point,
        start_node: Point,
    ) {
        *self = Self::DraggingNode {
            pointer_id,
            node_id,
            start_pointer,
            start_node,
        };
    }

    pub fn start_linking(&mut self, source: LinkingSource) {
        *self = Self::Linking { source };
    }

    /// Swap in a new pan sample, returning the previous one.
    pub fn advance_pan(&mut self, pos: Point) -> Option<Point> {
        match self {
            Self::Panning { last_pos, .. } => Some(std::mem::replace(last_pos, pos)),
            _ => None,
        }
    }
}
