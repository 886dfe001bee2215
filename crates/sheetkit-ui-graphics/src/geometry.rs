//! Geometric primitives: Point and GraphicsLayer

use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Signed vertical distance from `origin` to `self`. Positive is downward.
    pub fn vertical_delta(&self, origin: Point) -> f32 {
        self.y - origin.y
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Alpha and vertical translation for hosts that composite layers
/// themselves instead of writing CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub translation_y: f32,
}

impl GraphicsLayer {
    pub fn new(alpha: f32, translation_y: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            translation_y,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_translation_y(mut self, translation_y: f32) -> Self {
        self.translation_y = translation_y;
        self
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            translation_y: 0.0,
        }
    }
}
