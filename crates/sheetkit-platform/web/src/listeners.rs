use sheetkit_foundation::PointerEventKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, MouseEvent, TouchEvent};

/// Listened to on the content element.
pub(crate) const CONTENT_MOUSE_EVENTS: &[&str] = &["mousedown", "mouseleave"];
pub(crate) const CONTENT_TOUCH_EVENTS: &[&str] = &["touchstart"];

/// Listened to on the window while a drag is active.
pub(crate) const WINDOW_MOUSE_EVENTS: &[&str] = &["mousemove", "mouseup"];
pub(crate) const WINDOW_TOUCH_EVENTS: &[&str] = &["touchmove", "touchend", "touchcancel"];

/// Gesture role of a DOM event type.
pub(crate) fn drag_event_kind(event_type: &str) -> Option<PointerEventKind> {
    match event_type {
        "mousedown" | "touchstart" => Some(PointerEventKind::Down),
        "mousemove" | "touchmove" => Some(PointerEventKind::Move),
        "mouseup" | "touchend" => Some(PointerEventKind::Up),
        "mouseleave" => Some(PointerEventKind::Leave),
        "touchcancel" => Some(PointerEventKind::Cancel),
        _ => None,
    }
}

/// One mouse and one touch closure, each registered for several event
/// types on the same target.
pub(crate) struct DomListeners {
    mouse_events: &'static [&'static str],
    touch_events: &'static [&'static str],
    mouse: Closure<dyn FnMut(MouseEvent)>,
    touch: Closure<dyn FnMut(TouchEvent)>,
}

impl DomListeners {
    pub(crate) fn new(
        mouse_events: &'static [&'static str],
        touch_events: &'static [&'static str],
        mouse: Closure<dyn FnMut(MouseEvent)>,
        touch: Closure<dyn FnMut(TouchEvent)>,
    ) -> Self {
        Self {
            mouse_events,
            touch_events,
            mouse,
            touch,
        }
    }

    fn each(&self) -> impl Iterator<Item = (&'static str, &js_sys::Function)> + '_ {
        let mouse: &js_sys::Function = self.mouse.as_ref().unchecked_ref();
        let touch: &js_sys::Function = self.touch.as_ref().unchecked_ref();
        self.mouse_events
            .iter()
            .map(move |event| (*event, mouse))
            .chain(self.touch_events.iter().map(move |event| (*event, touch)))
    }

    pub(crate) fn add_to(&self, target: &EventTarget) -> Result<(), JsValue> {
        for (event, callback) in self.each() {
            target.add_event_listener_with_callback(event, callback)?;
        }
        Ok(())
    }

    pub(crate) fn remove_from(&self, target: &EventTarget) {
        for (event, callback) in self.each() {
            if let Err(err) = target.remove_event_listener_with_callback(event, callback) {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        }
    }
}
