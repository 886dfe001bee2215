//! Time-based transitions for SheetKit.
//!
//! The sheet never integrates physics. A transition is a fixed duration, an
//! easing curve and an optional delay; CSS hosts receive it as a
//! `transition` value and native hosts sample it with [`Tween`].

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// The CSS keyword easing curves. These are the only curves a CSS host
/// can express without a `cubic-bezier()` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Cubic bezier control points `(x1, y1, x2, y2)`, or `None` for linear.
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
        }
    }

    /// Eased progress for a linear fraction, clamped to [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self.control_points() {
            None => fraction,
            Some((x1, y1, x2, y2)) => UnitBezier { x1, y1, x2, y2 }.y_for_x(fraction),
        }
    }

    /// CSS `<easing-function>` keyword.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Bezier from (0, 0) to (1, 1) with two inner control points.
struct UnitBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl UnitBezier {
    const TOLERANCE: f32 = 1e-5;
    const MAX_STEPS: usize = 32;

    fn axis(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// x is monotonic in t for control points inside [0, 1], so bisection
    /// always finds the parameter.
    fn y_for_x(&self, x: f32) -> f32 {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = x;
        for _ in 0..Self::MAX_STEPS {
            let error = Self::axis(self.x1, self.x2, t) - x;
            if error.abs() < Self::TOLERANCE {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = (low + high) * 0.5;
        }
        Self::axis(self.y1, self.y2, t)
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// CSS `transition` value animating `property` with this spec,
    /// e.g. `transform 300ms ease-out`.
    pub fn css_transition(&self, property: &str) -> String {
        let mut value = format!(
            "{property} {}ms {}",
            self.duration_millis,
            self.easing.css()
        );
        if self.delay_millis > 0 {
            value.push_str(&format!(" {}ms", self.delay_millis));
        }
        value
    }

    /// Eased progress in [0, 1] after `elapsed_millis`, honouring the delay.
    pub fn progress_at(&self, elapsed_millis: u64) -> f32 {
        if elapsed_millis < self.delay_millis {
            return 0.0;
        }
        let running = elapsed_millis - self.delay_millis;
        let duration = self.duration_millis.max(1);
        let linear = (running as f32 / duration as f32).clamp(0.0, 1.0);
        self.easing.transform(linear)
    }

    pub fn total_millis(&self) -> u64 {
        self.delay_millis + self.duration_millis
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::EaseOut)
    }
}

/// A transition from `start` to `target` that began at `started_at_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    start: T,
    target: T,
    spec: AnimationSpec,
    started_at_ms: u64,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec, started_at_ms: u64) -> Self {
        Self {
            start,
            target,
            spec,
            started_at_ms,
        }
    }

    /// Value at `now_ms`. Times before the start yield `start`.
    pub fn value_at(&self, now_ms: u64) -> T {
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        if elapsed >= self.spec.total_millis() {
            return self.target.clone();
        }
        self.start.lerp(&self.target, self.spec.progress_at(elapsed))
    }

    pub fn is_finished_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.spec.total_millis()
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
