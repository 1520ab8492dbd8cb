//! The editor - one owned instance tying the store, viewport and input
//! state machine together.
//!
//! Hosts create a single [`Editor`] at startup and route every canvas event
//! into it. Handlers live next to their concern:
//!
//! - `input::pointer_down` / `pointer_move` / `pointer_up` - gestures
//! - `input::keyboard` - Delete/Backspace/Escape
//! - `input::transform` - wheel zoom and toolbar zoom
//! - `input::drop` - palette drops
//! - `properties` - properties-panel actions
//!
//! Every handler returns the [`Effect`]s the host must apply.

use crate::document::{Document, DocumentPatch, DocumentResult, ImportReport};
use crate::geometry::{Point, Size, point2};
use crate::hit_testing::HitTester;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{Effect, InputState};
use crate::notifications::{Toast, ToastManager};
use crate::perf::{TARGET_FRAME_MS, measure_and_log};
use crate::routing::{LinkPreview, RoutedEdge, link_preview, route_edges};
use crate::settings::EditorSettings;
use crate::store::DiagramStore;
use crate::types::{CursorPosition, Edge, LinkingSource, Node, NodeId};
use crate::viewport::Viewport;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Editor {
    pub(crate) store: DiagramStore,
    pub(crate) viewport: Viewport,
    pub(crate) input: InputState,
    /// Last pointer position; `screen` is container-relative
    pub(crate) cursor: Option<CursorPosition>,
    pub(crate) settings: EditorSettings,
    pub(crate) hit_tester: HitTester,
    /// Page-space top-left corner of the canvas container
    pub(crate) container_origin: Point,
    pub(crate) container_size: Option<Size>,
    pub(crate) toasts: ToastManager,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Editor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            store: DiagramStore::new(),
            viewport: Viewport::default(),
            input: InputState::default(),
            cursor: None,
            hit_tester: HitTester::from_settings(&settings),
            settings,
            container_origin: point2(0.0, 0.0),
            container_size: None,
            toasts: ToastManager::new(),
        }
    }

    // ==================== Accessors ====================

    pub fn store(&self) -> &DiagramStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> &InputState {
        &self.input
    }

    /// The connection being drawn, if any
    pub fn linking(&self) -> Option<&LinkingSource> {
        self.input.linking()
    }

    pub fn cursor(&self) -> Option<&CursorPosition> {
        self.cursor.as_ref()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.hit_tester = HitTester::from_settings(&settings);
        self.settings = settings;
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    /// Tell the editor where the canvas container sits on the page and how
    /// large it is. The size is optional; without it toolbar zoom pivots on
    /// the last cursor position.
    pub fn set_container(&mut self, origin: Point, size: Option<Size>) {
        self.container_origin = origin;
        self.container_size = size;
    }

    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.viewport, self.container_origin)
    }

    /// Page position to world position under the current transform
    pub fn screen_to_world(&self, page_pos: Point) -> Point {
        CoordinateConverter::screen_to_world(page_pos, &self.coordinate_context())
    }

    pub fn world_to_screen(&self, world_pos: Point) -> Point {
        CoordinateConverter::world_to_screen(world_pos, &self.coordinate_context())
    }

    pub(crate) fn update_cursor(&mut self, page_pos: Point) -> CursorPosition {
        let ctx = self.coordinate_context();
        let cursor = CursorPosition {
            screen: CoordinateConverter::page_to_container(page_pos, &ctx),
            world: CoordinateConverter::screen_to_world(page_pos, &ctx),
        };
        self.cursor = Some(cursor);
        cursor
    }

    // ==================== Rendering ====================

    pub fn routed_edges(&self) -> Vec<RoutedEdge> {
        measure_and_log("route_edges", TARGET_FRAME_MS, || {
            route_edges(&self.store, &self.settings.curve_style())
        })
    }

    /// The in-progress connector, while linking and once the cursor is known.
    pub fn link_preview(&self) -> Option<LinkPreview> {
        let source = self.input.linking()?;
        let cursor = self.cursor?;
        Some(link_preview(
            &self.store,
            source,
            cursor.world,
            self.viewport.k(),
            self.settings.snap_threshold_px,
            &self.settings.curve_style(),
        ))
    }

    // ==================== Direct edits ====================

    pub fn add_node(&mut self, node: Node) -> bool {
        self.store.add_node(node)
    }

    pub fn add_edge(&mut self, edge: Edge) -> bool {
        self.store.add_edge(edge)
    }

    /// Renderer callback after measuring a node.
    pub fn update_node_dimensions(&mut self, id: &NodeId, width: f64, height: f64) -> bool {
        self.store.update_node_dimensions(id, width, height)
    }

    /// Empty the board after the host's confirmation prompt.
    pub fn clear_board(&mut self) -> Vec<Effect> {
        if !self.store.clear() {
            return Vec::new();
        }
        info!("Board cleared");
        let mut effects = self.reconcile_input();
        effects.push(Effect::Render);
        effects
    }

    /// Drop any gesture that refers to a node that no longer exists.
    pub(crate) fn reconcile_input(&mut self) -> Vec<Effect> {
        let stale = match &self.input {
            InputState::DraggingNode { node_id, .. } => !self.store.contains_node(node_id),
            InputState::Linking { source } => !self.store.contains_node(&source.node_id),
            InputState::Idle | InputState::Panning { .. } => false,
        };
        if !stale {
            return Vec::new();
        }
        debug!(mode = ?self.input, "Gesture target removed, returning to idle");
        let released = self.input.captured_pointer();
        self.input.reset();
        released.map(Effect::ReleasePointer).into_iter().collect()
    }

    // ==================== Documents ====================

    pub fn document(&self) -> Document {
        Document::capture(&self.store, &self.viewport)
    }

    pub fn export_document(&self) -> DocumentResult<String> {
        self.document().to_json()
    }

    /// Import a document. On a malformed document nothing changes and an
    /// error toast is queued. The host applies `report.effects`.
    pub fn import_document(&mut self, json: &str) -> DocumentResult<ImportReport> {
        match DocumentPatch::parse(json) {
            Ok(patch) => Ok(self.apply_patch(patch)),
            Err(e) => {
                warn!("Import failed: {}", e);
                self.toasts.push(Toast::error(format!("Import failed: {}", e)));
                Err(e)
            }
        }
    }

    pub fn save_to(&mut self, path: &Path) -> DocumentResult<()> {
        let result = self.document().save(path);
        match &result {
            Ok(()) => self.toasts.push(Toast::success("Diagram exported")),
            Err(e) => self.toasts.push(Toast::error(format!("Export failed: {}", e))),
        };
        result
    }

    pub fn load_from(&mut self, path: &Path) -> DocumentResult<ImportReport> {
        match DocumentPatch::read(path) {
            Ok(patch) => Ok(self.apply_patch(patch)),
            Err(e) => {
                warn!(path = %path.display(), "Import failed: {}", e);
                self.toasts.push(Toast::error(format!("Import failed: {}", e)));
                Err(e)
            }
        }
    }

    fn apply_patch(&mut self, patch: DocumentPatch) -> ImportReport {
        let mut report = measure_and_log("apply_document", TARGET_FRAME_MS, || {
            patch.apply(&mut self.store, &mut self.viewport)
        });
        report.effects = self.reconcile_input();
        report.effects.push(Effect::Render);
        if !report.rejected.is_empty() {
            self.toasts.push(Toast::warning(format!(
                "Skipped malformed sections: {}",
                report.rejected.join(", ")
            )));
        }
        report
    }
}
