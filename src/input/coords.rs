//! Coordinate conversion utilities for canvas interactions.
//!
//! Pointer events arrive in page coordinates. Every conversion goes through a
//! [`CoordinateContext`], a snapshot of the viewport plus the container
//! origin, so one event never mixes two transforms.

use crate::geometry::{Point, Vector, point2, vec2};
use crate::viewport::Viewport;

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub viewport: Viewport,
    /// Page-space top-left corner of the canvas container
    pub container_origin: Point,
}

impl CoordinateContext {
    #[inline]
    pub fn new(viewport: Viewport, container_origin: Point) -> Self {
        Self {
            viewport,
            container_origin,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a page position to a container-relative screen position
    #[inline]
    pub fn page_to_container(page_pos: Point, ctx: &CoordinateContext) -> Point {
        point2(
            page_pos.x - ctx.container_origin.x,
            page_pos.y - ctx.container_origin.y,
        )
    }

    /// Convert a page position to world position:
    /// `world = (page - container_origin - translation) / k`
    #[inline]
    pub fn screen_to_world(page_pos: Point, ctx: &CoordinateContext) -> Point {
        ctx.viewport
            .screen_to_world(Self::page_to_container(page_pos, ctx))
    }

    /// Convert a world position to page position
    #[inline]
    pub fn world_to_screen(world_pos: Point, ctx: &CoordinateContext) -> Point {
        let local = ctx.viewport.world_to_screen(world_pos);
        point2(
            local.x + ctx.container_origin.x,
            local.y + ctx.container_origin.y,
        )
    }

    /// Convert a delta from screen to world (for drag operations)
    #[inline]
    pub fn delta_screen_to_world(delta: Vector, zoom: f64) -> Vector {
        vec2(delta.x / zoom, delta.y / zoom)
    }
}
