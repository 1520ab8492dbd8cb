//! Global key bindings. Ignored while focus is in a text field.

use crate::editor::Editor;
use crate::input::{Effect, Key, KeyEvent};
use tracing::debug;

impl Editor {
    pub fn on_key_down(&mut self, event: &KeyEvent) -> Vec<Effect> {
        if event.in_text_input {
            return Vec::new();
        }
        match &event.key {
            Key::Delete | Key::Backspace => self.delete_selection(),
            Key::Escape => self.escape(),
            Key::Other(_) => Vec::new(),
        }
    }

    /// Delete selected nodes (with their edges), or else the selected edge.
    pub fn delete_selection(&mut self) -> Vec<Effect> {
        let selection = self.store.selection().clone();
        let deleted = if !selection.nodes().is_empty() {
            self.store.delete_nodes(selection.nodes())
        } else if let Some(edge_id) = selection.edge() {
            self.store.delete_edge(edge_id)
        } else {
            false
        };
        if !deleted {
            return Vec::new();
        }
        debug!("Selection deleted");
        let mut effects = self.reconcile_input();
        effects.push(Effect::Render);
        effects
    }

    /// Clear the selection and cancel linking.
    fn escape(&mut self) -> Vec<Effect> {
        let mut changed = self.store.deselect_all();
        if self.input.is_linking() {
            debug!("Linking cancelled");
            self.input.reset();
            changed = true;
        }
        if changed {
            vec![Effect::Render]
        } else {
            Vec::new()
        }
    }
}
