//! Pointer input normalization and drag session tracking for SheetKit

pub mod gesture_constants;
pub mod nodes;

pub use nodes::input::gestures::{DragDirection, DragSession, GestureResult};
pub use nodes::input::{
    PointerDispatcher, PointerEvent, PointerEventKind, PointerSource, TouchPhase,
};
pub use sheetkit_ui_graphics::Point;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::gestures::{DragDirection, DragSession, GestureResult};
    pub use crate::nodes::input::prelude::*;
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod drag_tests;

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod input_tests;
