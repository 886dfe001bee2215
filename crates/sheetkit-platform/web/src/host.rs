use crate::listeners::DomListeners;
use sheetkit_ui::{Layer, SheetHost, StyleChange};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

/// Open flag plus the value last handed to the app.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenFlag {
    open: bool,
    reported: bool,
}

impl OpenFlag {
    pub(crate) fn new(open: bool) -> Self {
        Self {
            open,
            reported: open,
        }
    }

    pub(crate) fn get(&self) -> bool {
        self.open
    }

    pub(crate) fn set(&mut self, open: bool) {
        self.open = open;
    }

    /// The flag, if it differs from the one last taken.
    pub(crate) fn take_change(&mut self) -> Option<bool> {
        if self.open == self.reported {
            return None;
        }
        self.reported = self.open;
        Some(self.open)
    }
}

/// [`SheetHost`] backed by an overlay element and a content element.
///
/// The host owns the open flag. A change requested by the sheet is only
/// recorded here; [`DomSheetHost::take_open_change`] hands it to whoever
/// reports it, once the sheet is no longer borrowed.
pub struct DomSheetHost {
    window: Window,
    overlay: HtmlElement,
    content: HtmlElement,
    open: OpenFlag,
    last_viewport_height: f32,
    handlers: Option<DomListeners>,
}

impl DomSheetHost {
    pub fn new(window: Window, overlay: HtmlElement, content: HtmlElement, open: bool) -> Self {
        let mut host = Self {
            window,
            overlay,
            content,
            open: OpenFlag::new(open),
            last_viewport_height: 0.0,
            handlers: None,
        };
        host.last_viewport_height = host.read_viewport_height().unwrap_or(0.0);
        host
    }

    /// The open flag, if it changed since the last call.
    pub fn take_open_change(&mut self) -> Option<bool> {
        self.open.take_change()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn install_handlers(&mut self, handlers: DomListeners) {
        self.handlers = Some(handlers);
    }

    fn read_viewport_height(&self) -> Option<f32> {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .map(|height| height as f32)
    }

    fn element(&self, layer: Layer) -> &HtmlElement {
        match layer {
            Layer::Overlay => &self.overlay,
            Layer::Content => &self.content,
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    let style = element.style();
    if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    }
}

impl SheetHost for DomSheetHost {
    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn set_open(&mut self, open: bool) {
        self.open.set(open);
    }

    fn viewport_height(&self) -> f32 {
        self.read_viewport_height()
            .unwrap_or(self.last_viewport_height)
    }

    fn apply_style(&mut self, layer: Layer, change: StyleChange) {
        let (property, value) = match change {
            StyleChange::Transform(transform) => ("transform", transform.css()),
            StyleChange::Transition(transition) => {
                let property = match layer {
                    Layer::Overlay => "opacity",
                    Layer::Content => "transform",
                };
                ("transition", transition.css(property))
            }
            StyleChange::Opacity(opacity) => ("opacity", opacity.to_string()),
        };
        if let Err(err) = set_style(self.element(layer), property, &value) {
            log::warn!("failed to set {property}={value} on {layer:?}: {err:?}");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.window.document().and_then(|document| document.body()) else {
            log::warn!("no document body to lock scrolling on");
            return;
        };
        let value = if locked { "hidden" } else { "" };
        if let Err(err) = set_style(&body, "overflow", value) {
            log::warn!("failed to update body overflow: {err:?}");
        }
    }

    fn attach_drag_listeners(&mut self) {
        let Some(handlers) = self.handlers.as_ref() else {
            log::warn!("drag listeners requested before handlers were installed");
            return;
        };
        if let Err(err) = handlers.add_to(&self.window) {
            log::warn!("failed to add window drag listeners: {err:?}");
        }
    }

    fn detach_drag_listeners(&mut self) {
        if let Some(handlers) = self.handlers.as_ref() {
            handlers.remove_from(&self.window);
        }
    }
}
