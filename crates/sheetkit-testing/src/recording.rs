//! In-memory hosts that record everything a sheet asks of them.

use sheetkit_ui::{ContentTransform, Layer, PortalDocument, SheetHost, StyleChange, Transition};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One call made by the sheet on its host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Style(Layer, StyleChange),
    SetOpen(bool),
    ScrollLocked(bool),
    AttachListeners,
    DetachListeners,
}

/// Last value written for each style property of a layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStyle {
    pub transform: Option<ContentTransform>,
    pub transition: Option<Transition>,
    pub opacity: Option<f32>,
}

#[derive(Debug)]
struct HostState {
    open: bool,
    viewport_height: f32,
    scroll_locked: bool,
    listeners_attached: bool,
    overlay: LayerStyle,
    content: LayerStyle,
    calls: Vec<HostCall>,
}

/// A [`SheetHost`] that keeps the current style of both layers and a log of
/// every call. Clones share state, so a test can keep a handle after the
/// sheet that owns the host has been dropped.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    state: Rc<RefCell<HostState>>,
}

impl RecordingHost {
    pub fn new(viewport_height: f32, open: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                open,
                viewport_height,
                scroll_locked: false,
                listeners_attached: false,
                overlay: LayerStyle::default(),
                content: LayerStyle::default(),
                calls: Vec::new(),
            })),
        }
    }

    /// Host for a sheet that starts open.
    pub fn open_on(viewport_height: f32) -> Self {
        Self::new(viewport_height, true)
    }

    pub fn set_viewport_height(&self, height: f32) {
        self.state.borrow_mut().viewport_height = height;
    }

    /// Flips the flag without going through the sheet, like an external
    /// owner of the visibility state would.
    pub fn set_open_externally(&self, open: bool) {
        self.state.borrow_mut().open = open;
    }

    pub fn overlay(&self) -> LayerStyle {
        self.state.borrow().overlay.clone()
    }

    pub fn content(&self) -> LayerStyle {
        self.state.borrow().content.clone()
    }

    pub fn scroll_locked(&self) -> bool {
        self.state.borrow().scroll_locked
    }

    pub fn listeners_attached(&self) -> bool {
        self.state.borrow().listeners_attached
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|recorded| *recorded == call)
            .count()
    }

    /// Every transform written to the content layer, in order.
    pub fn content_transforms(&self) -> Vec<ContentTransform> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Style(Layer::Content, StyleChange::Transform(transform)) => {
                    Some(*transform)
                }
                _ => None,
            })
            .collect()
    }

    /// Every opacity written to the overlay layer, in order.
    pub fn overlay_opacities(&self) -> Vec<f32> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Style(Layer::Overlay, StyleChange::Opacity(opacity)) => Some(*opacity),
                _ => None,
            })
            .collect()
    }
}

impl SheetHost for RecordingHost {
    fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    fn set_open(&mut self, open: bool) {
        let mut state = self.state.borrow_mut();
        state.open = open;
        state.calls.push(HostCall::SetOpen(open));
    }

    fn viewport_height(&self) -> f32 {
        self.state.borrow().viewport_height
    }

    fn apply_style(&mut self, layer: Layer, change: StyleChange) {
        let mut state = self.state.borrow_mut();
        let target = match layer {
            Layer::Overlay => &mut state.overlay,
            Layer::Content => &mut state.content,
        };
        match change {
            StyleChange::Transform(transform) => target.transform = Some(transform),
            StyleChange::Transition(transition) => target.transition = Some(transition),
            StyleChange::Opacity(opacity) => target.opacity = Some(opacity),
        }
        state.calls.push(HostCall::Style(layer, change));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let mut state = self.state.borrow_mut();
        state.scroll_locked = locked;
        state.calls.push(HostCall::ScrollLocked(locked));
    }

    fn attach_drag_listeners(&mut self) {
        let mut state = self.state.borrow_mut();
        state.listeners_attached = true;
        state.calls.push(HostCall::AttachListeners);
    }

    fn detach_drag_listeners(&mut self) {
        let mut state = self.state.borrow_mut();
        state.listeners_attached = false;
        state.calls.push(HostCall::DetachListeners);
    }
}

/// Element stored in a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryElement {
    pub handle: usize,
    pub id: String,
    pub class_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryDocumentError(pub String);

impl fmt::Display for MemoryDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory document: {}", self.0)
    }
}

impl std::error::Error for MemoryDocumentError {}

/// A document root holding a flat list of attached elements.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    root_children: Vec<MemoryElement>,
    fail_creation: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes element creation fail, as a detached or read-only document would.
    pub fn failing() -> Self {
        Self {
            root_children: Vec::new(),
            fail_creation: true,
        }
    }

    pub fn root_children(&self) -> &[MemoryElement] {
        &self.root_children
    }
}

impl PortalDocument for MemoryDocument {
    type Container = usize;
    type Error = MemoryDocumentError;

    fn find_by_id(&self, id: &str) -> Option<usize> {
        self.root_children
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.handle)
    }

    fn create_attached(&mut self, id: &str, class_name: &str) -> Result<usize, Self::Error> {
        if self.fail_creation {
            return Err(MemoryDocumentError(format!("cannot create #{id}")));
        }
        let handle = self.root_children.len();
        self.root_children.push(MemoryElement {
            handle,
            id: id.to_string(),
            class_name: class_name.to_string(),
        });
        Ok(handle)
    }
}
