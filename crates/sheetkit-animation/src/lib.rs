//! Easing curves, transition specs and tween sampling for SheetKit

mod animation;

pub use animation::*;
