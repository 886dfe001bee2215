//! Clock, deferred tick queue and rate limiting for SheetKit

mod clock;
mod frame_clock;
mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{DeferredId, DeferredQueue};
pub use throttle::{throttle, Throttled};

pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::frame_clock::DeferredQueue;
    pub use crate::throttle::{throttle, Throttled};
}
