//! Pointer down - starts gestures and commits click-to-connect links.
//!
//! Hit testing runs first so the topmost layer consumes the event: a port
//! handle starts (or completes) a link, a node body starts a drag, an edge
//! gets selected, and only the bare background starts a pan.

use crate::editor::Editor;
use crate::hit_testing::HitTarget;
use crate::input::{Effect, PointerButton, PointerEvent};
use crate::profile_scope;
use crate::routing::output_anchor;
use crate::types::{Edge, HandleType, LinkingSource, NodeId};
use tracing::debug;

impl Editor {
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> Vec<Effect> {
        profile_scope!("on_pointer_down");

        if event.button == PointerButton::Secondary {
            return Vec::new();
        }
        // A second pointer while a captured gesture runs is ignored. A new
        // press from the captured pointer means its release was lost.
        let mut effects = Vec::new();
        if let Some(captured) = self.input.captured_pointer() {
            if captured != event.pointer_id {
                return effects;
            }
            debug!(mode = ?self.input, "Release lost, ending stale gesture");
            self.input.reset();
            effects.push(Effect::ReleasePointer(captured));
        }
        effects.extend(self.dispatch_press(event));
        effects
    }

    fn dispatch_press(&mut self, event: &PointerEvent) -> Vec<Effect> {
        let world = self.update_cursor(event.position).world;
        let hit = if event.button == PointerButton::Middle {
            HitTarget::Background
        } else {
            self.hit_tester.hit_test(&self.store, world, self.viewport.k())
        };

        if let Some(source) = self.input.linking().cloned() {
            return self.pointer_down_while_linking(source, hit);
        }

        match hit {
            HitTarget::Port {
                node_id,
                handle: HandleType::Source,
            } => self.start_linking(node_id),
            // Input ports only complete links
            HitTarget::Port {
                handle: HandleType::Target,
                ..
            } => vec![Effect::PreventDefault],
            HitTarget::Node(node_id) => {
                let Some(start_node) = self.store.node(&node_id).map(|n| n.position()) else {
                    return Vec::new();
                };
                self.store.select_node(&node_id, event.modifiers.shift);
                debug!(node = %node_id, "Drag started");
                self.input
                    .start_dragging(event.pointer_id, node_id, event.position, start_node);
                vec![Effect::CapturePointer(event.pointer_id), Effect::Render]
            }
            HitTarget::Edge(edge_id) => {
                self.store.select_edge(&edge_id);
                vec![Effect::Render]
            }
            HitTarget::Background => {
                self.store.deselect_all();
                debug!("Pan started");
                self.input.start_panning(event.pointer_id, event.position);
                vec![Effect::CapturePointer(event.pointer_id), Effect::Render]
            }
        }
    }

    fn start_linking(&mut self, node_id: NodeId) -> Vec<Effect> {
        let Some(node) = self.store.node(&node_id) else {
            return Vec::new();
        };
        let source = LinkingSource {
            anchor: output_anchor(node),
            node_id,
            handle_type: HandleType::Source,
        };
        debug!(node = %source.node_id, anchor = ?source.anchor, "Linking started");
        self.input.start_linking(source);
        vec![Effect::PreventDefault, Effect::Render]
    }

    fn pointer_down_while_linking(&mut self, source: LinkingSource, hit: HitTarget) -> Vec<Effect> {
        match hit {
            HitTarget::Port { node_id, handle } => {
                if self.try_complete_link(&source, &node_id, handle) {
                    vec![Effect::PreventDefault, Effect::Render]
                } else {
                    vec![Effect::PreventDefault]
                }
            }
            HitTarget::Background => {
                debug!(node = %source.node_id, "Linking cancelled");
                self.input.reset();
                vec![Effect::Render]
            }
            HitTarget::Node(_) | HitTarget::Edge(_) => Vec::new(),
        }
    }

    /// Create the edge if `node_id`'s `handle` is a valid end for `source`.
    ///
    /// The same node and same-type handles are ignored and linking stays
    /// active. A valid target ends linking even when the edge already exists.
    pub(crate) fn try_complete_link(
        &mut self,
        source: &LinkingSource,
        node_id: &NodeId,
        handle: HandleType,
    ) -> bool {
        if &source.node_id == node_id || handle == source.handle_type {
            return false;
        }
        let (from, to) = match source.handle_type {
            HandleType::Source => (source.node_id.clone(), node_id.clone()),
            HandleType::Target => (node_id.clone(), source.node_id.clone()),
        };
        let added = self.store.add_edge(Edge::connect(from, to));
        debug!(added, "Linking completed");
        self.input.reset();
        true
    }
}
