//! End-of-gesture classification.

use crate::config::SheetConfig;
use crate::style::ContentTransform;
use sheetkit_foundation::{DragDirection, GestureResult};

/// What a finished drag does to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetAction {
    Close,
    Reopen,
    SnapBack,
}

impl SheetAction {
    /// Visibility to request from the host, if any.
    pub fn requested_visibility(&self) -> Option<bool> {
        match self {
            SheetAction::Close => Some(false),
            SheetAction::Reopen => Some(true),
            SheetAction::SnapBack => None,
        }
    }

    /// Where the content layer animates to once transitions are back on.
    pub fn resting_transform(&self) -> ContentTransform {
        match self {
            SheetAction::Close => ContentTransform::OffScreen,
            SheetAction::Reopen | SheetAction::SnapBack => ContentTransform::Neutral,
        }
    }
}

/// Classifies a finished drag.
///
/// Direction gates first. A downward drag closes when it went past the
/// close threshold or moved fast. An upward drag reopens only when it moved
/// fast. Everything else snaps back.
pub fn classify(result: &GestureResult, viewport_height: f32, config: &SheetConfig) -> SheetAction {
    let threshold = config.close_threshold(viewport_height);
    let fast = result.average_velocity > config.fast_gesture_velocity;

    match result.direction {
        DragDirection::Down if result.net_displacement > threshold || fast => SheetAction::Close,
        DragDirection::Up if result.net_displacement < threshold && fast => SheetAction::Reopen,
        _ => SheetAction::SnapBack,
    }
}
