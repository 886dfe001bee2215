use sheetkit_animation::AnimationSpec;

/// The two surfaces a sheet styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Dimming layer behind the sheet.
    Overlay,
    /// The sliding panel itself.
    Content,
}

/// Vertical placement of the content layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentTransform {
    /// No transform; the sheet rests at its laid-out position.
    Neutral,
    /// Offset in logical pixels, positive downward.
    TranslateY(f32),
    /// Shifted down by its own full height.
    OffScreen,
}

impl ContentTransform {
    /// CSS `transform` value. `Neutral` is the empty string, which clears
    /// an inline transform.
    pub fn css(&self) -> String {
        match self {
            ContentTransform::Neutral => String::new(),
            ContentTransform::TranslateY(px) => format!("translateY({px}px)"),
            ContentTransform::OffScreen => "translateY(100%)".to_string(),
        }
    }

    /// Offset in pixels for a content layer of `content_height`.
    pub fn resolve(&self, content_height: f32) -> f32 {
        match self {
            ContentTransform::Neutral => 0.0,
            ContentTransform::TranslateY(px) => *px,
            ContentTransform::OffScreen => content_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Style changes apply instantly; used while the finger drives the sheet.
    Disabled,
    Enabled(AnimationSpec),
}

impl Transition {
    /// CSS `transition` value for `property`.
    pub fn css(&self, property: &str) -> String {
        match self {
            Transition::Disabled => "none".to_string(),
            Transition::Enabled(spec) => spec.css_transition(property),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Transition::Enabled(_))
    }
}

/// One style write requested from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleChange {
    Transform(ContentTransform),
    Transition(Transition),
    Opacity(f32),
}
