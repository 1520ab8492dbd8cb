//! Viewport transform - pan offset, zoom scale and the screen/world mapping.
//!
//! Screen coordinates are relative to the canvas container's top-left
//! corner; callers holding page/window coordinates go through
//! [`crate::input::coords`] which subtracts the container origin first.
//!
//! ```text
//! world  = (screen - translation) / k
//! screen = world * k + translation
//! ```

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::geometry::{Point, Vector, point2, vec2};
use serde::{Deserialize, Serialize};

/// Pan/zoom state of the canvas.
///
/// `x`/`y` are the screen-pixel position of the world origin, `k` the zoom
/// scale. The fields are private: every constructor, mutator and the
/// deserializer keep `k` inside `[MIN_ZOOM, MAX_ZOOM]` and the translation
/// finite, so conversions never divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawViewport")]
pub struct Viewport {
    x: f64,
    y: f64,
    k: f64,
}

/// Wire shape of a transform before clamping.
#[derive(Deserialize)]
struct RawViewport {
    x: f64,
    y: f64,
    k: f64,
}

impl From<RawViewport> for Viewport {
    fn from(raw: RawViewport) -> Self {
        Self::new(raw.x, raw.y, raw.k)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: DEFAULT_ZOOM,
        }
    }
}

/// Clamp a requested scale to the supported zoom range.
///
/// Non-finite requests fall back to the default zoom.
#[inline]
pub fn clamp_scale(k: f64) -> f64 {
    if k.is_finite() {
        k.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        DEFAULT_ZOOM
    }
}

impl Viewport {
    /// Build a viewport, clamping the scale. A non-finite translation
    /// component becomes 0.
    pub fn new(x: f64, y: f64, k: f64) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite(x),
            y: finite(y),
            k: clamp_scale(k),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    #[inline]
    pub fn translation(&self) -> Vector {
        vec2(self.x, self.y)
    }

    /// Convert a container-relative screen point to world space
    #[inline]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        point2((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }

    /// Convert a world point to container-relative screen space
    #[inline]
    pub fn world_to_screen(&self, world: Point) -> Point {
        point2(world.x * self.k + self.x, world.y * self.k + self.y)
    }

    /// Convert a screen-space length (pixels) to world units at the current scale
    #[inline]
    pub fn screen_len_to_world(&self, len: f64) -> f64 {
        len / self.k
    }

    /// Zoom to `target_scale` keeping the world point under `pivot` fixed on screen.
    ///
    /// Returns true if the transform changed. A non-finite request (a NaN
    /// wheel delta, say) leaves the transform untouched.
    pub fn zoom_at(&mut self, target_scale: f64, pivot: Point) -> bool {
        if !target_scale.is_finite() {
            return false;
        }
        let new_k = clamp_scale(target_scale);
        if new_k == self.k {
            return false;
        }
        let world = self.screen_to_world(pivot);
        self.x = pivot.x - world.x * new_k;
        self.y = pivot.y - world.y * new_k;
        self.k = new_k;
        true
    }

    /// Multiply the scale by `factor`, pivoting on `pivot`.
    pub fn zoom_by(&mut self, factor: f64, pivot: Point) -> bool {
        self.zoom_at(self.k * factor, pivot)
    }

    pub fn zoom_in(&mut self, pivot: Point) -> bool {
        self.zoom_by(ZOOM_IN_FACTOR, pivot)
    }

    pub fn zoom_out(&mut self, pivot: Point) -> bool {
        self.zoom_by(ZOOM_OUT_FACTOR, pivot)
    }

    /// Shift the translation by a screen-space delta. Panning is independent of scale.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.x += dx;
            self.y += dy;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
