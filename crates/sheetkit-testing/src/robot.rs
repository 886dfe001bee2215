//! Scripted gestures for sheet tests.
//!
//! A [`GestureRobot`] queues pointer events with explicit timestamps on a
//! [`ManualClock`] and flushes them, in order, through a
//! [`PointerDispatcher`] into a [`BottomSheet`].
//!
//! ```ignore
//! let mut robot = GestureRobot::new();
//! robot.press(100.0).drag_by(400.0, 8, 800).release(16);
//! let actions = robot.flush(&mut sheet);
//! robot.settle(&mut sheet);
//! ```

use sheetkit_core::{Clock, ManualClock};
use sheetkit_foundation::{PointerDispatcher, PointerEvent, PointerEventKind, PointerSource};
use sheetkit_ui::{BottomSheet, SheetAction, SheetHost};
use sheetkit_ui_graphics::Point;

pub struct GestureRobot {
    dispatcher: PointerDispatcher,
    clock: ManualClock,
    position: Point,
    source: PointerSource,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(time_ms: u64) -> Self {
        Self {
            dispatcher: PointerDispatcher::new(),
            clock: ManualClock::new(time_ms),
            position: Point::ZERO,
            source: PointerSource::Mouse,
        }
    }

    /// Emits subsequent events as if from `source`.
    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn pending(&self) -> usize {
        self.dispatcher.len()
    }

    pub fn press(&mut self, y: f32) -> &mut Self {
        self.position = Point::new(self.position.x, y);
        self.emit(PointerEventKind::Down)
    }

    pub fn move_to(&mut self, y: f32, after_ms: u64) -> &mut Self {
        self.clock.advance(after_ms);
        self.position = Point::new(self.position.x, y);
        self.emit(PointerEventKind::Move)
    }

    /// Moves by `dy` in `steps` evenly spaced samples spread over
    /// `duration_ms`.
    pub fn drag_by(&mut self, dy: f32, steps: u32, duration_ms: u64) -> &mut Self {
        let steps = steps.max(1);
        let origin = self.position.y;
        let start = self.now();
        for step in 1..=steps {
            let y = origin + dy * step as f32 / steps as f32;
            let at = start + duration_ms * step as u64 / steps as u64;
            self.clock.set(at);
            self.position = Point::new(self.position.x, y);
            self.emit(PointerEventKind::Move);
        }
        self
    }

    pub fn release(&mut self, after_ms: u64) -> &mut Self {
        self.clock.advance(after_ms);
        self.emit(PointerEventKind::Up)
    }

    /// Pointer leaves the content area mid-drag.
    pub fn leave(&mut self, after_ms: u64) -> &mut Self {
        self.clock.advance(after_ms);
        self.emit(PointerEventKind::Leave)
    }

    pub fn cancel(&mut self, after_ms: u64) -> &mut Self {
        self.clock.advance(after_ms);
        self.emit(PointerEventKind::Cancel)
    }

    /// Delivers every queued event to `sheet` in arrival order and returns
    /// the decisions it made.
    pub fn flush<H: SheetHost>(&mut self, sheet: &mut BottomSheet<H>) -> Vec<SheetAction> {
        let mut actions = Vec::new();
        self.dispatcher.drain(|event| {
            if let Some(action) = sheet.on_pointer_event(&event) {
                actions.push(action);
            }
        });
        actions
    }

    /// Advances the clock past every deferred deadline and lets the sheet
    /// apply them.
    pub fn settle<H: SheetHost>(&mut self, sheet: &mut BottomSheet<H>) {
        if let Some(deadline) = sheet.next_deadline() {
            if deadline > self.now() {
                self.clock.set(deadline);
            }
        }
        sheet.advance_to(self.now());
    }

    fn emit(&mut self, kind: PointerEventKind) -> &mut Self {
        let event =
            PointerEvent::new(kind, self.position, self.now()).with_source(self.source);
        self.dispatcher.push(event);
        self
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
