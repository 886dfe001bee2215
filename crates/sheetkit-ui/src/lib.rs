//! Bottom sheet gesture decision and presentation engine for SheetKit
//!
//! [`BottomSheet`] turns a stream of normalized pointer events into style
//! writes on a [`SheetHost`]: the content follows the finger while dragging,
//! the overlay fades, and on release the gesture is classified as
//! [`SheetAction::Close`], [`SheetAction::Reopen`] or [`SheetAction::SnapBack`].

mod config;
mod host;
mod portal;
pub mod sheet;
mod style;

pub use config::SheetConfig;
pub use host::{ListenerScope, SheetHost};
pub use portal::{portal_container, PortalDocument, PORTAL_CONTAINER_CLASS, PORTAL_CONTAINER_ID};
pub use sheet::decision::{classify, SheetAction};
pub use sheet::presentation::{content_offset, overlay_opacity, PresentationState};
pub use sheet::BottomSheet;
pub use style::{ContentTransform, Layer, StyleChange, Transition};

pub use sheetkit_foundation::{
    DragDirection, DragSession, GestureResult, PointerEvent, PointerEventKind, PointerSource,
};

pub mod prelude {
    pub use crate::config::SheetConfig;
    pub use crate::host::SheetHost;
    pub use crate::sheet::decision::SheetAction;
    pub use crate::sheet::presentation::PresentationState;
    pub use crate::sheet::BottomSheet;
    pub use crate::style::{ContentTransform, Layer, StyleChange, Transition};
}

#[cfg(test)]
#[path = "tests/decision_tests.rs"]
mod decision_tests;

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod presentation_tests;

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod style_tests;
