use sheetkit_foundation::{PointerEvent, PointerEventKind, PointerSource};
use sheetkit_ui_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::ElementState;

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    last_position: Point,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            last_position: Point::ZERO,
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
        uptime_ms: u64,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(position), uptime_ms)
    }

    /// Converts a cursor move and remembers the position for the next
    /// button event, which winit reports without coordinates.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, uptime_ms: u64) -> PointerEvent {
        let event = self.pointer_event(PointerEventKind::Move, position, uptime_ms);
        self.last_position = event.position;
        event
    }

    /// Primary button press or release at the last known cursor position.
    pub fn button_event(&self, state: ElementState, uptime_ms: u64) -> PointerEvent {
        let kind = match state {
            ElementState::Pressed => PointerEventKind::Down,
            ElementState::Released => PointerEventKind::Up,
        };
        PointerEvent::new(kind, self.last_position, uptime_ms).with_source(PointerSource::Mouse)
    }

    /// Cursor left the window; ends any drag in progress.
    pub fn cursor_left(&self, uptime_ms: u64) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Leave, self.last_position, uptime_ms)
    }

    /// Window height in logical pixels, for use as the sheet's viewport.
    pub fn viewport_height(&self, physical_height: u32) -> f32 {
        (physical_height as f64 / self.scale_factor) as f32
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
#[path = "tests/desktop_tests.rs"]
mod tests;
