//! Pointer, wheel, keyboard and drop handling for the canvas.
//!
//! ## Architecture
//!
//! The input system is an explicit state machine ([`InputState`]): exactly
//! one of Idle, Panning, DraggingNode or Linking is active, and each mode
//! carries the data its gesture needs on the next event. This replaces
//! independent `is_panning` / `linking_source` / drag-closure flags that
//! could disagree with each other.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Host-facing event and effect types
//! - `coords` - Page/container/world coordinate conversion
//! - `pointer_down` - Gesture start: link, drag, select edge, pan
//! - `pointer_move` - Pan, drag and link-preview updates
//! - `pointer_up` - Gesture end and drag-to-connect commits
//! - `keyboard` - Delete/Backspace and Escape
//! - `transform` - Wheel zoom and toolbar zoom
//! - `drop` - Palette drops that create nodes

pub mod coords;
mod drop;
mod events;
mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod transform;

pub use events::{
    Effect, Key, KeyEvent, Modifiers, PaletteItem, PointerButton, PointerEvent, PointerId,
    WheelEvent,
};
pub use state::InputState;
