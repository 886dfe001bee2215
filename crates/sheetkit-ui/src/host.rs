use crate::style::{Layer, StyleChange};

/// Everything a sheet needs from the surface it lives on.
///
/// The host owns the open/closed flag; the sheet only reads it and asks for
/// changes. Style writes are fire-and-forget.
pub trait SheetHost {
    fn is_open(&self) -> bool;

    fn set_open(&mut self, open: bool);

    /// Height of the visible viewport in logical pixels.
    fn viewport_height(&self) -> f32;

    fn apply_style(&mut self, layer: Layer, change: StyleChange);

    /// Locks or unlocks scrolling of the document behind the sheet.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Starts routing move/up events from the whole input surface (not just
    /// the content layer) to the sheet.
    fn attach_drag_listeners(&mut self);

    fn detach_drag_listeners(&mut self);
}

/// Tracks the global drag listeners so they are attached at most once and
/// detached exactly once per drag.
#[derive(Debug, Default)]
pub struct ListenerScope {
    attached: bool,
}

impl ListenerScope {
    pub fn new() -> Self {
        Self { attached: false }
    }

    pub fn acquire<H: SheetHost + ?Sized>(&mut self, host: &mut H) {
        if !self.attached {
            host.attach_drag_listeners();
            self.attached = true;
        }
    }

    pub fn release<H: SheetHost + ?Sized>(&mut self, host: &mut H) {
        if self.attached {
            host.detach_drag_listeners();
            self.attached = false;
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
