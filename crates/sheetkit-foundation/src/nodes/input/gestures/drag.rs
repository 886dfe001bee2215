//! Drag session tracking.
//!
//! A [`DragSession`] is a plain value. Each transition takes the previous
//! session and an input sample and returns the next session, so the whole
//! gesture can be replayed and inspected without a rendering surface.

use sheetkit_ui_graphics::Point;

/// Sign of the drag relative to where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Summary of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureResult {
    /// Signed distance from press to last sample; positive is downward.
    pub net_displacement: f32,
    /// Accumulated distance over elapsed time, in px/s.
    pub average_velocity: f32,
    pub direction: DragDirection,
    pub accumulated_distance: f32,
    pub elapsed_seconds: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_position: Option<Point>,
    current_position: Option<Point>,
    start_time_ms: Option<u64>,
    active: bool,
    direction: DragDirection,
    accumulated_distance: f32,
    elapsed_seconds: f32,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl DragSession {
    pub const EMPTY: DragSession = DragSession {
        start_position: None,
        current_position: None,
        start_time_ms: None,
        active: false,
        direction: DragDirection::None,
        accumulated_distance: 0.0,
        elapsed_seconds: 0.0,
    };

    /// Begins a session at `position`. Whatever session existed before is
    /// discarded.
    pub fn start(position: Point, time_ms: u64) -> Self {
        Self {
            start_position: Some(position),
            start_time_ms: Some(time_ms),
            active: true,
            ..Self::EMPTY
        }
    }

    /// Applies one move sample. Returns the session unchanged when no drag
    /// is in progress.
    #[must_use]
    pub fn update(self, position: Point, time_ms: u64) -> Self {
        let (true, Some(start), Some(start_time)) =
            (self.active, self.start_position, self.start_time_ms)
        else {
            return self;
        };

        let net = position.vertical_delta(start);
        let previous = self.current_position.unwrap_or(start);
        let step = position.vertical_delta(previous).abs();

        Self {
            current_position: Some(position),
            direction: if net > 0.0 {
                DragDirection::Down
            } else {
                DragDirection::Up
            },
            accumulated_distance: self.accumulated_distance + step,
            elapsed_seconds: time_ms.saturating_sub(start_time) as f32 / 1000.0,
            ..self
        }
    }

    /// Finishes the session.
    ///
    /// The returned session is always [`DragSession::EMPTY`] when a drag was
    /// active. A result is produced only if at least one move was recorded;
    /// a press released in place yields `None`.
    #[must_use]
    pub fn end(self) -> (DragSession, Option<GestureResult>) {
        if !self.active {
            return (self, None);
        }

        let result = match (self.start_position, self.current_position, self.start_time_ms) {
            (Some(start), Some(current), Some(_)) => Some(GestureResult {
                net_displacement: current.vertical_delta(start),
                average_velocity: average_velocity(
                    self.accumulated_distance,
                    self.elapsed_seconds,
                ),
                direction: self.direction,
                accumulated_distance: self.accumulated_distance,
                elapsed_seconds: self.elapsed_seconds,
            }),
            _ => None,
        };

        (Self::EMPTY, result)
    }

    /// Signed distance from press to the latest sample, if any move has been
    /// recorded.
    pub fn net_displacement(&self) -> Option<f32> {
        match (self.start_position, self.current_position) {
            (Some(start), Some(current)) => Some(current.vertical_delta(start)),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn start_position(&self) -> Option<Point> {
        self.start_position
    }

    pub fn current_position(&self) -> Option<Point> {
        self.current_position
    }

    pub fn start_time_ms(&self) -> Option<u64> {
        self.start_time_ms
    }

    pub fn direction(&self) -> DragDirection {
        self.direction
    }

    pub fn accumulated_distance(&self) -> f32 {
        self.accumulated_distance
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }
}

/// Distance over time, or 0 when no time has passed.
pub fn average_velocity(distance: f32, elapsed_seconds: f32) -> f32 {
    if elapsed_seconds > 0.0 {
        distance / elapsed_seconds
    } else {
        0.0
    }
}
