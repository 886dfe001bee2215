//! Deferred tick queue.
//!
//! Style writes that must land *after* the current update has been committed
//! are posted here with a delay and drained by the host once its clock has
//! moved past the deadline. Entries are plain data, so draining never needs
//! to borrow whoever posted them.

use smallvec::SmallVec;

pub type DeferredId = u64;

#[derive(Debug)]
struct Pending<T> {
    id: DeferredId,
    due_millis: u64,
    item: T,
}

#[derive(Debug)]
pub struct DeferredQueue<T> {
    pending: Vec<Pending<T>>,
    next_id: DeferredId,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Queues `item` to become due `delay_millis` after `now_millis`.
    pub fn post_delayed(&mut self, now_millis: u64, delay_millis: u64, item: T) -> DeferredId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_millis: now_millis.saturating_add(delay_millis),
            item,
        });
        id
    }

    /// Earliest deadline among queued entries.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|pending| pending.due_millis).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns every entry due at or before `now_millis`, ordered
    /// by deadline and then by posting order.
    pub fn drain_due(&mut self, now_millis: u64) -> SmallVec<[T; 2]> {
        if self.pending.iter().all(|pending| pending.due_millis > now_millis) {
            return SmallVec::new();
        }

        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for pending in self.pending.drain(..) {
            if pending.due_millis <= now_millis {
                due.push(pending);
            } else {
                remaining.push(pending);
            }
        }
        self.pending = remaining;

        due.sort_by_key(|pending| (pending.due_millis, pending.id));
        due.into_iter().map(|pending| pending.item).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
