//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue normalized events here and drain them into
//! a gesture consumer. Events leave the queue in exactly the order they
//! arrived; velocity depends on every delta being applied in sequence.

use super::types::PointerEvent;
use smallvec::SmallVec;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 8]>,
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
        F: FnMut(PointerEvent),
    {
        if !self.queue.is_empty() {
            log::trace!("dispatching {} pointer events", self.queue.len());
        }
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}
