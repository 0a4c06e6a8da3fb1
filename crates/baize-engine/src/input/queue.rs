/// Pointer events the simulation understands. World coordinates; the host
/// is responsible for any screen-space conversion.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A press began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A press ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
}

/// A queue of pointer events. The host writes events in; the table drains
/// them once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
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
