//! Shared gesture constants for the sheet drag gestures.
//!
//! Distances are expressed as fractions of the viewport height so the same
//! gesture feels identical on a phone and on a tall desktop window. Velocities
//! are in logical pixels per second.

/// A downward drag farther than this fraction of the viewport closes the
/// sheet on release.
pub const CLOSE_DISTANCE_FRACTION: f32 = 0.5;

/// The overlay is fully transparent once the sheet has been dragged down by
/// this fraction of the viewport.
pub const FADE_OUT_DISTANCE_FRACTION: f32 = 0.5;

/// Average drag speed above which a gesture counts as a flick.
///
/// A downward flick closes the sheet regardless of distance; an upward flick
/// is the only way to reopen.
pub const FAST_GESTURE_VELOCITY: f32 = 500.0;

/// Visual travel per pixel of upward drag.
pub const UPWARD_DRAG_RESISTANCE: f32 = 0.1;

/// Upward visual travel is clamped to this fraction of the viewport.
pub const MAX_UPWARD_DRAG_FRACTION: f32 = 0.01;

/// Delay between re-enabling the content transition and writing the final
/// transform. Writing both in the same update lets the renderer coalesce
/// them, which skips the animation.
pub const TRANSITION_REENABLE_DELAY_MS: u64 = 10;
