//! Testing utilities and harness for SheetKit

pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use recording::{
    HostCall, LayerStyle, MemoryDocument, MemoryDocumentError, MemoryElement, RecordingHost,
};
pub use robot::GestureRobot;
pub use robot_assertions::assert_approx_eq;

pub mod prelude {
    pub use crate::recording::{HostCall, LayerStyle, MemoryDocument, RecordingHost};
    pub use crate::robot::GestureRobot;
    pub use crate::robot_assertions;
}
