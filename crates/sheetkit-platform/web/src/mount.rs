use crate::host::DomSheetHost;
use crate::listeners::{
    drag_event_kind, DomListeners, CONTENT_MOUSE_EVENTS, CONTENT_TOUCH_EVENTS,
    WINDOW_MOUSE_EVENTS, WINDOW_TOUCH_EVENTS,
};
use crate::WebPlatform;
use sheetkit_foundation::PointerEvent;
use sheetkit_ui::{BottomSheet, SheetConfig, SheetHost};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent, TouchEvent, Window};

type SharedSheet = Rc<RefCell<BottomSheet<DomSheetHost>>>;
pub(crate) type OpenChangeSlot = Rc<RefCell<Option<Box<dyn FnMut(bool)>>>>;

/// What every DOM handler holds: the sheet, weakly, and the app's
/// visibility callback.
#[derive(Clone)]
struct HandlerContext {
    sheet: Weak<RefCell<BottomSheet<DomSheetHost>>>,
    on_open_change: OpenChangeSlot,
}

/// A bottom sheet wired to live DOM elements.
///
/// Dropping it removes every listener it installed and unlocks scrolling.
pub struct WebSheet {
    sheet: SharedSheet,
    content: HtmlElement,
    handlers: DomListeners,
    on_open_change: OpenChangeSlot,
}

impl WebSheet {
    pub fn mount(
        overlay: HtmlElement,
        content: HtmlElement,
        open: bool,
        config: SheetConfig,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let host = DomSheetHost::new(window, overlay, content.clone(), open);
        let sheet = Rc::new(RefCell::new(BottomSheet::with_config(host, config)));
        let context = HandlerContext {
            sheet: Rc::downgrade(&sheet),
            on_open_change: Rc::new(RefCell::new(None)),
        };

        let window_handlers = DomListeners::new(
            WINDOW_MOUSE_EVENTS,
            WINDOW_TOUCH_EVENTS,
            mouse_handler(&context),
            touch_handler(&context),
        );
        sheet.borrow_mut().host_mut().install_handlers(window_handlers);

        let handlers = DomListeners::new(
            CONTENT_MOUSE_EVENTS,
            CONTENT_TOUCH_EVENTS,
            mouse_handler(&context),
            touch_handler(&context),
        );
        handlers.add_to(&content)?;
        log::debug!("web sheet mounted (open={open})");

        Ok(Self {
            sheet,
            content,
            handlers,
            on_open_change: context.on_open_change,
        })
    }

    pub fn is_open(&self) -> bool {
        self.sheet.borrow().host().is_open()
    }

    /// Changes visibility on behalf of the app. The app's own request is
    /// not echoed back through the open-change callback.
    pub fn set_open(&self, open: bool) {
        let mut sheet = self.sheet.borrow_mut();
        sheet.set_open(open);
        sheet.host_mut().take_open_change();
    }

    /// Registers the callback invoked when a gesture changes visibility.
    /// It runs after the sheet has finished handling the event, so it may
    /// call back into this `WebSheet`.
    pub fn on_open_change(&self, callback: impl FnMut(bool) + 'static) {
        match self.on_open_change.try_borrow_mut() {
            Ok(mut slot) => *slot = Some(Box::new(callback)),
            Err(_) => log::warn!("open-change callback cannot be replaced from inside itself"),
        }
    }
}

impl Drop for WebSheet {
    fn drop(&mut self) {
        self.handlers.remove_from(&self.content);
        if let Ok(mut sheet) = self.sheet.try_borrow_mut() {
            sheet.teardown();
        }
    }
}

fn mouse_handler(context: &HandlerContext) -> Closure<dyn FnMut(MouseEvent)> {
    let context = context.clone();
    let platform = WebPlatform::new();
    Closure::new(move |event: MouseEvent| {
        if let Some(kind) = drag_event_kind(&event.type_()) {
            dispatch(&context, Some(platform.mouse_event(kind, &event)));
        }
    })
}

fn touch_handler(context: &HandlerContext) -> Closure<dyn FnMut(TouchEvent)> {
    let context = context.clone();
    let platform = WebPlatform::new();
    Closure::new(move |event: TouchEvent| {
        if let Some(kind) = drag_event_kind(&event.type_()) {
            dispatch(&context, platform.touch_event(kind, &event));
        }
    })
}

fn dispatch(context: &HandlerContext, event: Option<PointerEvent>) {
    let (Some(sheet), Some(event)) = (context.sheet.upgrade(), event) else {
        return;
    };
    let (deadline, open_change) = {
        let Ok(mut guard) = sheet.try_borrow_mut() else {
            log::warn!("dropping {:?}: sheet is busy", event.kind);
            return;
        };
        guard.on_pointer_event(&event);
        guard.sync_visibility();
        (guard.next_deadline(), guard.host_mut().take_open_change())
    };
    if let Some(deadline) = deadline {
        schedule_tick(&sheet, deadline);
    }
    if let Some(open) = open_change {
        report_open_change(&context.on_open_change, open);
    }
}

pub(crate) fn report_open_change(slot: &OpenChangeSlot, open: bool) {
    let Ok(mut slot) = slot.try_borrow_mut() else {
        log::warn!("open-change callback re-entered; dropping open={open}");
        return;
    };
    if let Some(callback) = slot.as_mut() {
        callback(open);
    }
}

fn now_millis(window: &Window) -> u64 {
    window
        .performance()
        .map(|performance| crate::timestamp_millis(performance.now()))
        .unwrap_or(0)
}

/// Pumps the sheet's deferred queue once `deadline` has passed. Reschedules
/// itself while entries remain, since timers may fire a fraction early.
fn schedule_tick(sheet: &SharedSheet, deadline: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let delay = tick_delay(deadline, now_millis(&window));
    let weak = Rc::downgrade(sheet);
    let tick = Closure::once_into_js(move || {
        let (Some(sheet), Some(window)) = (weak.upgrade(), web_sys::window()) else {
            return;
        };
        let next = match sheet.try_borrow_mut() {
            Ok(mut sheet) => {
                sheet.advance_to(now_millis(&window));
                sheet.next_deadline()
            }
            Err(_) => Some(deadline),
        };
        if let Some(next) = next {
            schedule_tick(&sheet, next);
        }
    });
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(tick.unchecked_ref(), delay)
    {
        log::warn!("failed to schedule deferred tick: {err:?}");
    }
}

/// Timer delay in whole milliseconds, at least 1 so a late tick still
/// yields to the browser.
pub(crate) fn tick_delay(deadline: u64, now: u64) -> i32 {
    let remaining = deadline.saturating_sub(now).max(1);
    i32::try_from(remaining).unwrap_or(i32::MAX)
}
