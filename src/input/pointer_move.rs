//! Pointer move - pan, node drag and link preview updates.
//!
//! Moves arrive at display rate, so each branch does the minimum: one
//! viewport or store write, or nothing at all while idle.

use crate::editor::Editor;
use crate::geometry::point2;
use crate::input::coords::CoordinateConverter;
use crate::input::{Effect, InputState, PointerEvent};
use crate::profile_scope;

impl Editor {
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Vec<Effect> {
        profile_scope!("on_pointer_move");

        if self
            .input
            .captured_pointer()
            .is_some_and(|captured| captured != event.pointer_id)
        {
            return Vec::new();
        }
        self.update_cursor(event.position);

        match &self.input {
            InputState::Idle => Vec::new(),
            InputState::Linking { .. } => vec![Effect::Render],
            InputState::Panning { .. } => {
                let Some(prev) = self.input.advance_pan(event.position) else {
                    return Vec::new();
                };
                // Incremental: delta from the previous sample
                let delta = event.position - prev;
                self.viewport.pan_by(delta.x, delta.y);
                vec![Effect::Render]
            }
            InputState::DraggingNode {
                node_id,
                start_pointer,
                start_node,
                ..
            } => {
                let delta = CoordinateConverter::delta_screen_to_world(
                    event.position - *start_pointer,
                    self.viewport.k(),
                );
                let target = point2(
                    self.settings.snap(start_node.x + delta.x),
                    self.settings.snap(start_node.y + delta.y),
                );
                let node_id = node_id.clone();
                if self.store.update_node_position(&node_id, target) {
                    vec![Effect::Render]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
