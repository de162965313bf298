/// Input events the orrery consumes. Pointer coordinates are canvas-local
/// pixels; the trackball owns the conversion to normalized coordinates.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Mouse button / touch pressed at canvas pixel (x, y).
    PointerDown { x: f32, y: f32 },
    /// Mouse button / touch released at canvas pixel (x, y).
    PointerUp { x: f32, y: f32 },
    /// Cursor moved to canvas pixel (x, y).
    PointerMove { x: f32, y: f32 },
    /// A discrete control event from the UI layer (checkboxes, rate
    /// buttons, color sliders). `kind` identifies the control; `a`, `b`,
    /// `c` carry its values.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
