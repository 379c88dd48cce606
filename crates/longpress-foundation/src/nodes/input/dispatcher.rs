//! Pointer event queue between the host and a control.
//!
//! Platform integrations push events as they arrive and the UI thread drains
//! them in arrival order once per frame.

use smallvec::SmallVec;

use super::types::PointerEvent;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 4]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(&PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(&event);
        }
    }
}
