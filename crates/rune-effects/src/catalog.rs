//! The selector catalog: scroll-gated effects as data.
//!
//! Each entry binds a class name to animation parameters and a gate
//! template. Installation iterates the table generically; adding an effect
//! means adding a row, not writing new wiring code.

use serde::{Deserialize, Serialize};

use rune_motion::{
    EasingCurve, GateTemplate, InsetRect, PropertyMap, StyleProperty, TriggerPoint, TweenSpec,
};

/// Class selector for fade-up entrances.
pub const CLASS_FADE_UP: &str = "gsap-fade-up";
/// Class selector for staggered child entrances.
pub const CLASS_STAGGER: &str = "gsap-stagger";
/// Class selector for scroll-coupled parallax drift.
pub const CLASS_PARALLAX: &str = "gsap-parallax";
/// Class selector for overshoot scale-in entrances.
pub const CLASS_SCALE_IN: &str = "gsap-scale-in";
/// Class selector for clip-mask reveals.
pub const CLASS_REVEAL: &str = "gsap-reveal";

/// What a catalog entry animates for each matched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// The matched element itself, one tween per element.
    SelfElement,
    /// The matched element's direct children as one staggered batch, with
    /// the matched element as the gate trigger.
    DirectChildren,
}

/// One row of the selector catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSpec {
    /// Effect name, used for config toggles and runtime handles.
    pub name: String,
    /// Class name the effect selects on (without the leading dot).
    pub class: String,
    /// What the effect animates per match.
    pub target: TargetMode,
    /// Start state applied before playback.
    pub from: PropertyMap,
    /// End state the tween animates towards.
    pub to: PropertyMap,
    /// Timing for the tween.
    pub tween: TweenSpec,
    /// Gate parameters, instantiated per matched element.
    pub gate: GateTemplate,
}

/// The built-in effect table.
pub fn builtin() -> Vec<EffectSpec> {
    vec![
        EffectSpec {
            name: "fade-up".into(),
            class: CLASS_FADE_UP.into(),
            target: TargetMode::SelfElement,
            from: PropertyMap::new()
                .with(StyleProperty::TranslateY, 50.0)
                .with(StyleProperty::Opacity, 0.0),
            to: PropertyMap::new()
                .with(StyleProperty::TranslateY, 0.0)
                .with(StyleProperty::Opacity, 1.0),
            tween: TweenSpec::new(800.0, EasingCurve::CubicOut),
            gate: GateTemplate::starting_at(TriggerPoint::top_at(0.85)).fire_once(),
        },
        EffectSpec {
            name: "stagger".into(),
            class: CLASS_STAGGER.into(),
            target: TargetMode::DirectChildren,
            from: PropertyMap::new()
                .with(StyleProperty::TranslateY, 40.0)
                .with(StyleProperty::Opacity, 0.0),
            to: PropertyMap::new()
                .with(StyleProperty::TranslateY, 0.0)
                .with(StyleProperty::Opacity, 1.0),
            tween: TweenSpec::new(600.0, EasingCurve::CubicOut).with_stagger(100.0),
            gate: GateTemplate::starting_at(TriggerPoint::top_at(0.8)),
        },
        EffectSpec {
            name: "parallax".into(),
            class: CLASS_PARALLAX.into(),
            target: TargetMode::SelfElement,
            // No start state: the drift begins from wherever the element sits.
            from: PropertyMap::new(),
            to: PropertyMap::new().with(
                StyleProperty::TranslateYPercent,
                rune_motion::StyleValue::percent(-20.0),
            ),
            tween: TweenSpec::new(0.0, EasingCurve::Linear),
            gate: GateTemplate::starting_at(TriggerPoint::top_at(1.0))
                .scrubbed_until(TriggerPoint::bottom_at(0.0)),
        },
        EffectSpec {
            name: "scale-in".into(),
            class: CLASS_SCALE_IN.into(),
            target: TargetMode::SelfElement,
            from: PropertyMap::new()
                .with(StyleProperty::Scale, 0.8)
                .with(StyleProperty::Opacity, 0.0),
            to: PropertyMap::new()
                .with(StyleProperty::Scale, 1.0)
                .with(StyleProperty::Opacity, 1.0),
            tween: TweenSpec::new(700.0, EasingCurve::back_out(1.7)),
            gate: GateTemplate::starting_at(TriggerPoint::top_at(0.85)),
        },
        EffectSpec {
            name: "reveal".into(),
            class: CLASS_REVEAL.into(),
            target: TargetMode::SelfElement,
            from: PropertyMap::new().with(StyleProperty::ClipInset, InsetRect::from_top(100.0)),
            to: PropertyMap::new().with(StyleProperty::ClipInset, InsetRect::open()),
            tween: TweenSpec::new(1000.0, EasingCurve::CubicInOut),
            gate: GateTemplate::starting_at(TriggerPoint::top_at(0.8)),
        },
    ]
}
