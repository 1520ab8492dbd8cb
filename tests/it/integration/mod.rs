//! Integration tests for Archboard.
//!
//! These drive the editor through host events (pointer, wheel, keyboard,
//! drop) and check the resulting document and interaction mode.

mod keyboard_tests;
mod pan_drag_tests;
mod wheel_zoom_tests;
