pub mod drag;

pub use drag::{DragDirection, DragSession, GestureResult};
