//! Host-facing event and effect types.
//!
//! Hosts translate their native pointer, wheel, keyboard and drop events
//! into these values, feed them to the [`crate::editor::Editor`], and apply
//! the returned [`Effect`]s (pointer capture, default suppression, redraw).

use crate::geometry::Point;

/// Identifier of a pointer (mouse, pen or touch contact).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button event from the default pointer
    pub fn at(position: Point) -> Self {
        Self {
            pointer_id: PointerId::default(),
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// A wheel event in page coordinates. Positive `delta_y` scrolls down (zooms out).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta_y: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// True when keyboard focus is inside a text input or textarea
    pub in_text_input: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            in_text_input: false,
        }
    }

    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }
}

/// Payload of a palette drag: the component being dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteItem {
    pub kind: String,
    pub label: String,
    pub icon_name: Option<String>,
}

impl PaletteItem {
    pub fn new(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            icon_name: None,
        }
    }

    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }
}

/// Side effects the host must apply after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Route further move/up events for this pointer to the canvas
    CapturePointer(PointerId),
    ReleasePointer(PointerId),
    /// Suppress the platform's default handling (page scroll/zoom)
    PreventDefault,
    /// Document, viewport or transient state changed
    Render,
}
