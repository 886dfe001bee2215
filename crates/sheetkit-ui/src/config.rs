use sheetkit_animation::{AnimationSpec, Easing};
use sheetkit_foundation::gesture_constants::{
    CLOSE_DISTANCE_FRACTION, FADE_OUT_DISTANCE_FRACTION, FAST_GESTURE_VELOCITY,
    MAX_UPWARD_DRAG_FRACTION, TRANSITION_REENABLE_DELAY_MS, UPWARD_DRAG_RESISTANCE,
};

/// Tuning for a [`BottomSheet`](crate::BottomSheet).
///
/// Fractions are relative to the viewport height reported by the host at
/// the time they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    pub close_distance_fraction: f32,
    pub fade_out_distance_fraction: f32,
    /// px/s
    pub fast_gesture_velocity: f32,
    pub upward_drag_resistance: f32,
    pub max_upward_drag_fraction: f32,
    pub transition_reenable_delay_ms: u64,
    pub content_transition: AnimationSpec,
    pub overlay_transition: AnimationSpec,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            close_distance_fraction: CLOSE_DISTANCE_FRACTION,
            fade_out_distance_fraction: FADE_OUT_DISTANCE_FRACTION,
            fast_gesture_velocity: FAST_GESTURE_VELOCITY,
            upward_drag_resistance: UPWARD_DRAG_RESISTANCE,
            max_upward_drag_fraction: MAX_UPWARD_DRAG_FRACTION,
            transition_reenable_delay_ms: TRANSITION_REENABLE_DELAY_MS,
            content_transition: AnimationSpec::tween(300, Easing::EaseOut),
            overlay_transition: AnimationSpec::tween(300, Easing::EaseOut),
        }
    }
}

impl SheetConfig {
    pub fn with_close_distance_fraction(mut self, fraction: f32) -> Self {
        self.close_distance_fraction = fraction;
        self
    }

    pub fn with_fade_out_distance_fraction(mut self, fraction: f32) -> Self {
        self.fade_out_distance_fraction = fraction;
        self
    }

    pub fn with_fast_gesture_velocity(mut self, velocity: f32) -> Self {
        self.fast_gesture_velocity = velocity;
        self
    }

    pub fn with_upward_drag_resistance(mut self, resistance: f32) -> Self {
        self.upward_drag_resistance = resistance;
        self
    }

    pub fn with_max_upward_drag_fraction(mut self, fraction: f32) -> Self {
        self.max_upward_drag_fraction = fraction;
        self
    }

    pub fn with_transition_reenable_delay(mut self, delay_ms: u64) -> Self {
        self.transition_reenable_delay_ms = delay_ms;
        self
    }

    pub fn with_content_transition(mut self, spec: AnimationSpec) -> Self {
        self.content_transition = spec;
        self
    }

    pub fn with_overlay_transition(mut self, spec: AnimationSpec) -> Self {
        self.overlay_transition = spec;
        self
    }

    pub fn close_threshold(&self, viewport_height: f32) -> f32 {
        viewport_height * self.close_distance_fraction
    }

    pub fn fade_out_distance(&self, viewport_height: f32) -> f32 {
        viewport_height * self.fade_out_distance_fraction
    }

    pub fn max_upward_drag(&self, viewport_height: f32) -> f32 {
        viewport_height * self.max_upward_drag_fraction
    }
}
