//! Fixed-interval call suppression.

use crate::clock::{Clock, SystemClock};

/// Wraps `action` so that it runs on the first call and is then suppressed
/// until `interval_ms` has elapsed since the last call that actually ran.
pub fn throttle<F>(action: F, interval_ms: u64) -> Throttled<F> {
    Throttled::with_clock(action, interval_ms, SystemClock::new())
}

/// A throttled callable. State is per instance; it is not meant to be
/// shared between callers.
pub struct Throttled<F, C = SystemClock> {
    action: F,
    interval_ms: u64,
    last_invocation_ms: Option<u64>,
    clock: C,
}

impl<F, C: Clock> Throttled<F, C> {
    pub fn with_clock(action: F, interval_ms: u64, clock: C) -> Self {
        Self {
            action,
            interval_ms,
            last_invocation_ms: None,
            clock,
        }
    }

    /// Calls the action if the interval has elapsed. Returns whether it ran.
    pub fn call<A>(&mut self, arg: A) -> bool
    where
        F: FnMut(A),
    {
        let now = self.clock.now_millis();
        self.call_at(now, arg)
    }

    /// Same as [`Throttled::call`] with an explicit timestamp.
    pub fn call_at<A>(&mut self, now_ms: u64, arg: A) -> bool
    where
        F: FnMut(A),
    {
        if let Some(last) = self.last_invocation_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                log::trace!("throttled call suppressed at {now_ms}ms (last {last}ms)");
                return false;
            }
        }
        self.last_invocation_ms = Some(now_ms);
        (self.action)(arg);
        true
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_invocation_ms(&self) -> Option<u64> {
        self.last_invocation_ms
    }

    /// Forgets the last invocation so the next call runs immediately.
    pub fn reset(&mut self) {
        self.last_invocation_ms = None;
    }
}

#[cfg(test)]
#[path = "tests/throttle_tests.rs"]
mod tests;
