//! Geometry and layer primitives for SheetKit
//!
//! Coordinates are logical pixels with the y axis pointing down, so a
//! positive vertical delta moves toward the bottom edge of the viewport.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
