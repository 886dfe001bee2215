use sheetkit_animation::Tween;
use sheetkit_core::{Clock, ManualClock};
use sheetkit_ui::{ContentTransform, Layer, SheetHost, StyleChange, Transition};

/// Fraction of the viewport taken by the sheet's content.
const CONTENT_HEIGHT_FRACTION: f32 = 0.6;

/// A host with no surface: it logs every request and simulates the content
/// transition so the demo can print where the sheet would be.
pub struct LoggingHost {
    clock: ManualClock,
    open: bool,
    viewport_height: f32,
    scroll_locked: bool,
    content_transition: Transition,
    content_offset: f32,
    motion: Option<Tween<f32>>,
}

impl LoggingHost {
    pub fn new(clock: ManualClock, viewport_height: f32, open: bool) -> Self {
        Self {
            clock,
            open,
            viewport_height,
            scroll_locked: false,
            content_transition: Transition::Disabled,
            content_offset: 0.0,
            motion: None,
        }
    }

    fn content_height(&self) -> f32 {
        self.viewport_height * CONTENT_HEIGHT_FRACTION
    }

    /// Content offset at the current time, following any running transition.
    pub fn visible_offset(&self) -> f32 {
        match &self.motion {
            Some(tween) => tween.value_at(self.clock.now_millis()),
            None => self.content_offset,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.motion
            .as_ref()
            .map_or(true, |tween| tween.is_finished_at(self.clock.now_millis()))
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn move_content(&mut self, target: f32) {
        let now = self.clock.now_millis();
        let from = self.visible_offset();
        self.motion = match self.content_transition {
            Transition::Enabled(spec) if (target - from).abs() > f32::EPSILON => {
                Some(Tween::new(from, target, spec, now))
            }
            _ => None,
        };
        self.content_offset = target;
    }
}

impl SheetHost for LoggingHost {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        log::info!("visibility requested: open={open}");
        self.open = open;
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn apply_style(&mut self, layer: Layer, change: StyleChange) {
        match (layer, change) {
            (Layer::Content, StyleChange::Transform(transform)) => {
                log::debug!("content transform: {:?}", transform.css());
                let target = transform.resolve(self.content_height());
                if matches!(transform, ContentTransform::TranslateY(_)) {
                    log::trace!("content follows pointer to {target:.1}px");
                }
                self.move_content(target);
            }
            (Layer::Content, StyleChange::Transition(transition)) => {
                log::debug!("content transition: {}", transition.css("transform"));
                self.content_transition = transition;
            }
            (layer, change) => log::debug!("{layer:?} style: {change:?}"),
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        log::info!("document scroll locked={locked}");
        self.scroll_locked = locked;
    }

    fn attach_drag_listeners(&mut self) {
        log::debug!("global drag listeners attached");
    }

    fn detach_drag_listeners(&mut self) {
        log::debug!("global drag listeners detached");
    }
}
