//! Canvas transformations - wheel zoom and toolbar zoom.

use crate::constants::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::editor::Editor;
use crate::geometry::{Point, point2};
use crate::input::coords::CoordinateConverter;
use crate::input::{Effect, WheelEvent};
use crate::viewport::Viewport;

impl Editor {
    /// Zoom anchored at the pointer. Always suppresses the page's own
    /// scroll/zoom.
    pub fn on_wheel(&mut self, event: &WheelEvent) -> Vec<Effect> {
        let pivot = CoordinateConverter::page_to_container(event.position, &self.coordinate_context());
        let target = self.viewport.k() * (1.0 - event.delta_y * self.settings.wheel_zoom_sensitivity);
        if self.viewport.zoom_at(target, pivot) {
            vec![Effect::PreventDefault, Effect::Render]
        } else {
            vec![Effect::PreventDefault]
        }
    }

    /// Multiply the scale by `factor` around the container centre (or the
    /// last cursor position when the container size is unknown).
    pub fn zoom_by(&mut self, factor: f64) -> Vec<Effect> {
        let pivot = self.zoom_pivot();
        if self.viewport.zoom_by(factor, pivot) {
            vec![Effect::Render]
        } else {
            Vec::new()
        }
    }

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        self.zoom_by(ZOOM_IN_FACTOR)
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        self.zoom_by(ZOOM_OUT_FACTOR)
    }

    pub fn reset_view(&mut self) -> Vec<Effect> {
        if self.viewport == Viewport::default() {
            return Vec::new();
        }
        self.viewport.reset();
        vec![Effect::Render]
    }

    /// Container-relative pivot for toolbar zoom
    fn zoom_pivot(&self) -> Point {
        if let Some(size) = self.container_size {
            return point2(size.width / 2.0, size.height / 2.0);
        }
        self.cursor.map(|c| c.screen).unwrap_or(point2(0.0, 0.0))
    }
}
