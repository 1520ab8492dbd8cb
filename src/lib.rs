//! Archboard - the canvas interaction engine of a system-design diagram editor.
//!
//! Users drop typed service blocks onto an infinite pan/zoom canvas, wire
//! directed connections between them, edit per-node and per-edge metadata,
//! and save the diagram as a JSON document. This crate is the headless core:
//! hosts feed it pointer, wheel, keyboard and drop events and draw what it
//! exposes.
//!
//! ## Layout
//!
//! - [`viewport`] - pan/zoom transform and the screen/world mapping
//! - [`store`] - nodes, edges and selection with cascade and uniqueness rules
//! - [`input`] - the pointer interaction state machine
//! - [`routing`] - port anchors, connection curves, snap-to-port, edge hits
//! - [`document`] - JSON export/import
//! - [`editor`] - the single owned instance tying these together

pub mod catalog;
pub mod constants;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod properties;
pub mod registry;
pub mod routing;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod viewport;

pub use editor::Editor;
