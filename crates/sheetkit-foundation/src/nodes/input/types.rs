use sheetkit_ui_graphics::Point;

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the content area. Terminates a drag like `Up`.
    Leave,
    Cancel,
}

impl PointerEventKind {
    /// Whether this kind terminates a drag session.
    pub fn ends_gesture(self) -> bool {
        matches!(
            self,
            PointerEventKind::Up | PointerEventKind::Leave | PointerEventKind::Cancel
        )
    }
}

/// Touch lifecycle as reported by touch-capable platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<TouchPhase> for PointerEventKind {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Started => PointerEventKind::Down,
            TouchPhase::Moved => PointerEventKind::Move,
            TouchPhase::Ended => PointerEventKind::Up,
            TouchPhase::Cancelled => PointerEventKind::Cancel,
        }
    }
}

/// A normalized pointer sample: one coordinate and one timestamp.
///
/// Mouse, pen and touch input all arrive in this shape so gesture tracking
/// never needs to know which device produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event time in milliseconds on the host's monotonic clock.
    pub uptime_ms: u64,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            kind,
            position,
            uptime_ms,
            source: PointerSource::Mouse,
        }
    }

    pub fn from_touch(phase: TouchPhase, position: Point, uptime_ms: u64) -> Self {
        Self::new(phase.into(), position, uptime_ms).with_source(PointerSource::Touch)
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }
}
