//! Pointer up / leave - ends captured gestures.
//!
//! Panning and node drags end here and release capture; a dragged node keeps
//! its final position. Linking is not ended by a release: the link waits for
//! a click on a valid input port, or a release over one (drag-to-connect).

use crate::editor::Editor;
use crate::hit_testing::HitTarget;
use crate::input::{Effect, PointerEvent};
use crate::profile_scope;
use tracing::debug;

impl Editor {
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> Vec<Effect> {
        profile_scope!("on_pointer_up");

        if self.input.captured_pointer().is_some() {
            return self.end_captured_gesture(event);
        }

        let Some(source) = self.input.linking().cloned() else {
            return Vec::new();
        };
        let world = self.update_cursor(event.position).world;
        if let HitTarget::Port { node_id, handle } =
            self.hit_tester.hit_test(&self.store, world, self.viewport.k())
        {
            if self.try_complete_link(&source, &node_id, handle) {
                return vec![Effect::Render];
            }
        }
        Vec::new()
    }

    /// Pointer left the canvas. Ends a captured gesture like a release would.
    pub fn on_pointer_leave(&mut self, event: &PointerEvent) -> Vec<Effect> {
        if self.input.captured_pointer().is_some() {
            return self.end_captured_gesture(event);
        }
        Vec::new()
    }

    fn end_captured_gesture(&mut self, event: &PointerEvent) -> Vec<Effect> {
        let Some(captured) = self.input.captured_pointer() else {
            return Vec::new();
        };
        if captured != event.pointer_id {
            return Vec::new();
        }
        debug!(mode = ?self.input, "Gesture ended");
        self.input.reset();
        vec![Effect::ReleasePointer(captured), Effect::Render]
    }
}
