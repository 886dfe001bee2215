//! Per-event visuals derived from the drag session.

use crate::config::SheetConfig;
use sheetkit_foundation::DragSession;
use sheetkit_ui_graphics::GraphicsLayer;

/// Content offset for a net drag displacement.
///
/// Downward drags map 1:1. Upward drags are damped by the resistance factor
/// and clamped to the maximum upward travel.
pub fn content_offset(net_displacement: f32, viewport_height: f32, config: &SheetConfig) -> f32 {
    if net_displacement > 0.0 {
        net_displacement
    } else {
        (net_displacement * config.upward_drag_resistance)
            .max(-config.max_upward_drag(viewport_height))
    }
}

/// Overlay opacity for a net drag displacement. Only downward movement fades.
pub fn overlay_opacity(net_displacement: f32, viewport_height: f32, config: &SheetConfig) -> f32 {
    if net_displacement <= 0.0 {
        return 1.0;
    }
    let fade_distance = config.fade_out_distance(viewport_height);
    if fade_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - net_displacement / fade_distance).clamp(0.0, 1.0)
}

/// Visual state for the current frame. Never stored; recomputed from the
/// session and the host's open flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationState {
    pub overlay_opacity: f32,
    /// Signed vertical offset of the content in pixels.
    pub content_offset: f32,
    pub transition_enabled: bool,
}

impl PresentationState {
    pub fn derive(
        session: &DragSession,
        is_open: bool,
        viewport_height: f32,
        config: &SheetConfig,
    ) -> Self {
        if session.is_active() {
            let net = session.net_displacement().unwrap_or(0.0);
            Self {
                overlay_opacity: overlay_opacity(net, viewport_height, config),
                content_offset: content_offset(net, viewport_height, config),
                transition_enabled: false,
            }
        } else {
            Self {
                overlay_opacity: if is_open { 1.0 } else { 0.0 },
                content_offset: 0.0,
                transition_enabled: true,
            }
        }
    }

    pub fn overlay_layer(&self) -> GraphicsLayer {
        GraphicsLayer::new(self.overlay_opacity, 0.0)
    }

    pub fn content_layer(&self) -> GraphicsLayer {
        GraphicsLayer::new(1.0, self.content_offset)
    }
}
