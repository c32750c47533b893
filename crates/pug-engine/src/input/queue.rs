use serde::{Deserialize, Serialize};

/// Physical keys the engine can bind to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    C,
    D,
    E,
    P,
    Q,
    S,
    T,
    W,
    X,
    Z,
    Up,
    Down,
    Left,
    Right,
    Space,
    Return,
    Escape,
}

/// Window events the engine understands.
/// Generic: no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: KeyCode },
    /// A key was released.
    KeyUp { key: KeyCode },
    /// The window was resized to (width, height) pixels.
    Resized { width: f32, height: f32 },
    /// The user asked to close the window.
    Closed,
}

/// A queue of window events.
/// The window backend fills it; the host loop drains it once per frame.
#[derive(Debug, Default)]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key: KeyCode::W });
        q.push(InputEvent::KeyUp { key: KeyCode::W });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn key_codes_deserialize_from_names() {
        let key: KeyCode = serde_json::from_str("\"Escape\"").unwrap();
        assert_eq!(key, KeyCode::Escape);
    }
}
