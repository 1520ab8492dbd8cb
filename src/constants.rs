//! Editor-wide constants.
//!
//! Centralizes magic numbers for the canvas geometry and interaction
//! thresholds. Values that users may want to tune are mirrored as defaults
//! in [`crate::settings::EditorSettings`].

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Multiplier applied by the toolbar "zoom in" button
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Multiplier applied by the toolbar "zoom out" button
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Scale change per wheel delta unit (`k * (1 - delta_y * sensitivity)`)
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

// ============================================================================
// Node Defaults
// ============================================================================

/// Width assumed for a node before the renderer has measured it
pub const DEFAULT_NODE_WIDTH: f64 = 160.0;

/// Height assumed for a node before the renderer has measured it
pub const DEFAULT_NODE_HEIGHT: f64 = 60.0;

/// Grid size node drags are quantized to (0 or 1 disables snapping)
pub const SNAP_GRID: f64 = 20.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// Screen-pixel radius within which a link endpoint snaps to an input port
pub const PORT_SNAP_THRESHOLD_PX: f64 = 40.0;

/// Screen-pixel radius of a port handle's clickable area
pub const PORT_HIT_RADIUS_PX: f64 = 10.0;

/// Stroke width (world units) of the invisible edge hit region
pub const EDGE_HIT_WIDTH: f64 = 15.0;

/// Number of line segments used to approximate a curve when hit testing
pub const CURVE_HIT_SEGMENTS: usize = 32;

// ============================================================================
// Connection Curves
// ============================================================================

/// Control point offset as a fraction of the horizontal anchor distance
pub const CURVE_OFFSET_FACTOR: f64 = 0.5;

/// Floor for the control point offset; keeps zero-distance curves from collapsing
pub const CURVE_MIN_OFFSET: f64 = 40.0;

// ============================================================================
// Icons
// ============================================================================

/// Icon key used when a node's icon name is absent or unknown
pub const DEFAULT_ICON: &str = "Server";

/// Component kind used when a node's type is not in the catalog or registry
pub const GENERIC_KIND: &str = "server";
