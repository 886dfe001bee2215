//! The bottom sheet controller.
//!
//! Event flow for one drag:
//!
//! 1. `Down` commits pending visibility effects, drops any queued resting
//!    transform, starts a session, turns the content transition off and
//!    attaches the global move/up listeners.
//! 2. Every `Move` updates the session and writes the content offset and
//!    overlay opacity.
//! 3. `Up`, `Leave` or `Cancel` ends the session, classifies it, requests a
//!    visibility change when needed, turns the transition back on, restores
//!    the overlay and queues the resting transform on the deferred tick.
//!
//! Visibility side effects (overlay opacity, scroll lock, transform reset)
//! run when the sheet observes the host's flag change, either through
//! [`BottomSheet::sync_visibility`] or on the next [`BottomSheet::advance_to`].

pub mod decision;
pub mod presentation;

use crate::config::SheetConfig;
use crate::host::{ListenerScope, SheetHost};
use crate::style::{ContentTransform, Layer, StyleChange, Transition};
use decision::{classify, SheetAction};
use presentation::{content_offset, overlay_opacity, PresentationState};
use sheetkit_core::DeferredQueue;
use sheetkit_foundation::{DragSession, PointerEvent, PointerEventKind, Point};

pub struct BottomSheet<H: SheetHost> {
    host: H,
    config: SheetConfig,
    session: DragSession,
    listeners: ListenerScope,
    deferred: DeferredQueue<ContentTransform>,
    observed_open: Option<bool>,
    scroll_locked: bool,
    last_event_ms: u64,
}

impl<H: SheetHost> BottomSheet<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, SheetConfig::default())
    }

    /// Mounts a sheet on `host`, applying the overlay transition and the
    /// side effects of the host's current visibility.
    pub fn with_config(host: H, config: SheetConfig) -> Self {
        let mut sheet = Self {
            host,
            config,
            session: DragSession::EMPTY,
            listeners: ListenerScope::new(),
            deferred: DeferredQueue::new(),
            observed_open: None,
            scroll_locked: false,
            last_event_ms: 0,
        };
        let overlay_transition = Transition::Enabled(sheet.config.overlay_transition);
        sheet
            .host
            .apply_style(Layer::Overlay, StyleChange::Transition(overlay_transition));
        sheet.sync_visibility();
        sheet
    }

    /// Routes one normalized pointer event. Returns the decision when the
    /// event ended a drag.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<SheetAction> {
        match event.kind {
            PointerEventKind::Down => {
                self.start_drag(event.position, event.uptime_ms);
                None
            }
            PointerEventKind::Move => {
                self.update_drag(event.position, event.uptime_ms);
                None
            }
            PointerEventKind::Up | PointerEventKind::Leave | PointerEventKind::Cancel => {
                self.last_event_ms = self.last_event_ms.max(event.uptime_ms);
                self.end_drag()
            }
        }
    }

    pub fn start_drag(&mut self, position: Point, time_ms: u64) {
        if self.session.is_active() {
            log::debug!("press during an active drag; restarting session");
        }
        // Pending visibility effects run now; a resting transform still
        // queued from the previous drag is superseded by this one.
        self.sync_visibility();
        if !self.deferred.is_empty() {
            log::debug!("press cancels {} pending transform(s)", self.deferred.len());
            self.deferred.clear();
        }
        self.last_event_ms = time_ms;
        self.session = DragSession::start(position, time_ms);
        self.host.apply_style(
            Layer::Content,
            StyleChange::Transition(Transition::Disabled),
        );
        self.listeners.acquire(&mut self.host);
        log::debug!("drag started at y={} t={}ms", position.y, time_ms);
    }

    /// Applies a move sample. Ignored when no drag is active.
    pub fn update_drag(&mut self, position: Point, time_ms: u64) {
        if !self.session.is_active() {
            return;
        }
        self.last_event_ms = time_ms;
        self.session = self.session.update(position, time_ms);

        let Some(net) = self.session.net_displacement() else {
            return;
        };
        let viewport_height = self.host.viewport_height();
        let offset = content_offset(net, viewport_height, &self.config);
        let opacity = overlay_opacity(net, viewport_height, &self.config);
        log::trace!("drag net={net:.1} offset={offset:.1} opacity={opacity:.3}");

        self.host.apply_style(
            Layer::Content,
            StyleChange::Transform(ContentTransform::TranslateY(offset)),
        );
        self.host
            .apply_style(Layer::Overlay, StyleChange::Opacity(opacity));
    }

    /// Ends the current drag. Ignored when no drag is active.
    ///
    /// A press released without any move restores the sheet like a
    /// snap-back.
    pub fn end_drag(&mut self) -> Option<SheetAction> {
        if !self.session.is_active() {
            return None;
        }

        let (session, result) = self.session.end();
        self.session = session;
        self.listeners.release(&mut self.host);

        let viewport_height = self.host.viewport_height();
        let action = match result {
            Some(result) => {
                let action = classify(&result, viewport_height, &self.config);
                log::debug!(
                    "drag ended: net={:.1} velocity={:.1}px/s direction={:?} -> {:?}",
                    result.net_displacement,
                    result.average_velocity,
                    result.direction,
                    action
                );
                action
            }
            None => {
                log::debug!("drag ended without movement -> SnapBack");
                SheetAction::SnapBack
            }
        };

        if let Some(open) = action.requested_visibility() {
            self.host.set_open(open);
        }
        self.host.apply_style(
            Layer::Content,
            StyleChange::Transition(Transition::Enabled(self.config.content_transition)),
        );
        self.host
            .apply_style(Layer::Overlay, StyleChange::Opacity(1.0));
        self.deferred.post_delayed(
            self.last_event_ms,
            self.config.transition_reenable_delay_ms,
            action.resting_transform(),
        );

        Some(action)
    }

    /// Requests a visibility change and applies its side effects right away.
    pub fn set_open(&mut self, open: bool) {
        self.host.set_open(open);
        self.sync_visibility();
    }

    /// Applies visibility side effects if the host's flag changed since the
    /// last time it was observed.
    pub fn sync_visibility(&mut self) {
        let open = self.host.is_open();
        if self.observed_open == Some(open) {
            return;
        }
        self.observed_open = Some(open);
        log::debug!("sheet visibility changed: open={open}");

        self.host.apply_style(
            Layer::Overlay,
            StyleChange::Opacity(if open { 1.0 } else { 0.0 }),
        );
        self.set_scroll_locked(open);
        self.host.apply_style(
            Layer::Content,
            StyleChange::Transition(Transition::Enabled(self.config.content_transition)),
        );
        self.host.apply_style(
            Layer::Content,
            StyleChange::Transform(ContentTransform::Neutral),
        );
    }

    /// Commits pending visibility side effects, then applies every deferred
    /// transform due at `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.sync_visibility();
        for transform in self.deferred.drain_due(now_ms) {
            log::debug!("deferred transform applied at {now_ms}ms: {transform:?}");
            self.host
                .apply_style(Layer::Content, StyleChange::Transform(transform));
        }
    }

    /// Deadline of the earliest queued deferred transform.
    pub fn next_deadline(&self) -> Option<u64> {
        self.deferred.next_deadline()
    }

    pub fn presentation(&self) -> PresentationState {
        PresentationState::derive(
            &self.session,
            self.host.is_open(),
            self.host.viewport_height(),
            &self.config,
        )
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    /// Releases everything the sheet holds on the host. Safe to call more
    /// than once; also runs on drop.
    pub fn teardown(&mut self) {
        self.listeners.release(&mut self.host);
        self.session = DragSession::EMPTY;
        self.deferred.clear();
        self.set_scroll_locked(false);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        if self.scroll_locked != locked {
            self.scroll_locked = locked;
            self.host.set_scroll_locked(locked);
        }
    }
}

impl<H: SheetHost> Drop for BottomSheet<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
