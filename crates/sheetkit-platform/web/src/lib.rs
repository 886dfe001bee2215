//! Web platform adapter for SheetKit
//!
//! Mounts a [`BottomSheet`](sheetkit_ui::BottomSheet) on two DOM elements.
//! Logging goes through `log`; install a browser sink such as `wasm-logger`
//! in the embedding app to see it.

mod document;
mod host;
mod listeners;
mod mount;

pub use document::DomDocument;
pub use host::DomSheetHost;
pub use mount::WebSheet;

use sheetkit_foundation::{PointerEvent, PointerEventKind, PointerSource};
use sheetkit_ui_graphics::Point;
use web_sys::{MouseEvent, TouchEvent};

/// Converts DOM input events into [`PointerEvent`]s.
///
/// Mouse and touch events are normalized separately; pointer events are not
/// listened to, since browsers fire them alongside the compatibility mouse
/// events and the sheet would see every sample twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, x: f64, y: f64) -> Point {
        // client_x/client_y are already in CSS pixels
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        x: f64,
        y: f64,
        time_stamp: f64,
        source: PointerSource,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(x, y), timestamp_millis(time_stamp))
            .with_source(source)
    }

    pub fn mouse_event(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        self.pointer_event(
            kind,
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            event.time_stamp(),
            PointerSource::Mouse,
        )
    }

    /// Uses the first changed touch. Returns `None` for a touch event that
    /// carries no touches.
    pub fn touch_event(&self, kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let touch = event.changed_touches().get(0)?;
        Some(self.pointer_event(
            kind,
            f64::from(touch.client_x()),
            f64::from(touch.client_y()),
            event.time_stamp(),
            PointerSource::Touch,
        ))
    }
}

/// DOM high-resolution timestamps are fractional milliseconds since the
/// time origin; the sheet works in whole milliseconds.
pub fn timestamp_millis(time_stamp: f64) -> u64 {
    if time_stamp.is_finite() && time_stamp > 0.0 {
        time_stamp as u64
    } else {
        0
    }
}

#[cfg(test)]
#[path = "tests/web_tests.rs"]
mod tests;
