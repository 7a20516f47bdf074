// src/controllers/input.rs
// Input events collected from window callbacks and drained once per frame

use crate::models::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point2D),
    PointerMove(Point2D),
    PointerUp(Point2D),
    Quit,
}

#[derive(Debug, Default)]
pub struct InputQueue {
    event_queue: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            event_queue: Vec::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.event_queue.push(event);
    }

    /// Takes every pending event in arrival order
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.event_queue)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.event_queue.is_empty()
    }
}
