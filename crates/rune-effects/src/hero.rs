//! Hero entrance timeline.
//!
//! Runs once at initialization, not scroll-gated: the title slides up and
//! fades in, the subtitle starts before the title finishes, the CTA before
//! the subtitle finishes. The title is the anchor: without it no timeline
//! is built, even when subtitle or CTA elements exist.

use tracing::debug;

use rune_motion::{
    EasingCurve, EffectHandle, PropertyMap, SharedEngine, StyleProperty, TimelineSpec, TweenSpec,
};

use crate::document::SharedDocument;
use crate::error::EffectsError;

/// Class selector for the hero title.
pub const CLASS_HERO_TITLE: &str = "hero-title";
/// Class selector for the hero subtitle.
pub const CLASS_HERO_SUBTITLE: &str = "hero-subtitle";
/// Class selector for the hero call-to-action.
pub const CLASS_HERO_CTA: &str = "hero-cta";

/// Slide-up entrance states for the given starting offset.
fn entrance_states(offset_y: f64) -> (PropertyMap, PropertyMap) {
    (
        PropertyMap::new()
            .with(StyleProperty::TranslateY, offset_y)
            .with(StyleProperty::Opacity, 0.0),
        PropertyMap::new()
            .with(StyleProperty::TranslateY, 0.0)
            .with(StyleProperty::Opacity, 1.0),
    )
}

/// Build the hero timeline for the given document, if a title is present.
pub fn build_timeline(document: &SharedDocument) -> Option<TimelineSpec> {
    let Some(title) = document.first_with_class(CLASS_HERO_TITLE) else {
        debug!("no hero title, skipping hero timeline");
        return None;
    };

    let (from, to) = entrance_states(60.0);
    let mut timeline =
        TimelineSpec::new().step(title, from, to, TweenSpec::new(1000.0, EasingCurve::CubicOut));

    if let Some(subtitle) = document.first_with_class(CLASS_HERO_SUBTITLE) {
        let (from, to) = entrance_states(40.0);
        timeline = timeline.step_overlapping(
            600.0,
            subtitle,
            from,
            to,
            TweenSpec::new(800.0, EasingCurve::CubicOut),
        );
    }

    if let Some(cta) = document.first_with_class(CLASS_HERO_CTA) {
        let (from, to) = entrance_states(30.0);
        timeline = timeline.step_overlapping(
            400.0,
            cta,
            from,
            to,
            TweenSpec::new(600.0, EasingCurve::CubicOut),
        );
    }

    Some(timeline)
}

/// Install the hero timeline, if a title element exists.
pub fn install(
    document: &SharedDocument,
    engine: &SharedEngine,
) -> Result<Option<Box<dyn EffectHandle>>, EffectsError> {
    let Some(timeline) = build_timeline(document) else {
        return Ok(None);
    };
    Ok(Some(engine.build_timeline(timeline)?))
}
