//! Host-agnostic input events consumed by [`ViewTransform`](crate::view::ViewTransform).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Wheel movement at `cursor`. Positive `delta_y` zooms by the positive
    /// scroll factor, negative by the negative one.
    Scroll { cursor: [f32; 2], delta_y: f32 },
    PointerDown { pos: [f32; 2], button: PointerButton },
    PointerDrag { pos: [f32; 2] },
    PointerUp { button: PointerButton },
    /// The host surface changed size.
    Resized { width: f32, height: f32 },
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The host should not also interpret the event (e.g. as a click).
    pub consumed: bool,
    /// Visual state changed; schedule a repaint.
    pub redraw: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        consumed: false,
        redraw: false,
    };

    pub fn redraw() -> Self {
        Self {
            consumed: true,
            redraw: true,
        }
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            redraw: false,
        }
    }
}
