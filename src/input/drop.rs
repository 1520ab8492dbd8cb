//! Palette drops - the only way nodes are created from the canvas.

use crate::constants::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, GENERIC_KIND};
use crate::editor::Editor;
use crate::geometry::{Point, vec2};
use crate::input::{Effect, PaletteItem};
use crate::types::{Node, NodeData, NodeId};
use tracing::debug;

impl Editor {
    /// Create a node for `item` centred under the page-space drop point.
    pub fn on_drop(&mut self, item: &PaletteItem, page_pos: Point) -> (NodeId, Vec<Effect>) {
        let world = self.screen_to_world(page_pos);
        let position = world - vec2(DEFAULT_NODE_WIDTH / 2.0, DEFAULT_NODE_HEIGHT / 2.0);

        let kind = match item.kind.trim() {
            "" => GENERIC_KIND,
            kind => kind,
        };
        let label = match item.label.trim() {
            "" => capitalize(kind),
            label => label.to_string(),
        };
        let mut data = NodeData::new(label);
        data.icon_name = item.icon_name.clone();

        let id = NodeId::generate();
        debug!(node = %id, kind, ?position, "Node dropped");
        self.store
            .add_node(Node::new(id.clone(), kind, position, data));
        (id, vec![Effect::Render])
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
