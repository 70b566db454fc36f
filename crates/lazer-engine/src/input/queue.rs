// input/queue.rs
//
// Pointer events and the queue the host writes them into. The host (DOM
// listeners in the wasm bridge, or a test) pushes events as they arrive;
// the engine drains the queue once per frame.

/// Pointer events the engine understands.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// The pointer moved to page coordinates (x, y).
    Move { x: f32, y: f32 },
    /// A press began at page coordinates (x, y).
    Down { x: f32, y: f32 },
    /// The press ended. Observed globally — a drag may end anywhere on
    /// screen, so there are no coordinates to trust here.
    Up,
}

/// A queue of pending pointer events.
pub struct InputQueue {
    events: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new pointer event (called from the host's listeners).
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(PointerEvent::Move { x: 10.0, y: 20.0 });
        q.push(PointerEvent::Up);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(PointerEvent::Down { x: 1.0, y: 2.0 });
        q.push(PointerEvent::Move { x: 3.0, y: 4.0 });
        let events = q.drain();
        match events[0] {
            PointerEvent::Down { x, y } => {
                assert_eq!(x, 1.0);
                assert_eq!(y, 2.0);
            }
            _ => panic!("expected Down first"),
        }
        match events[1] {
            PointerEvent::Move { x, .. } => assert_eq!(x, 3.0),
            _ => panic!("expected Move second"),
        }
    }
}
