//! Tween timing specifications.
//!
//! A `TweenSpec` carries everything timing-related about a single tween:
//! duration, start delay, easing curve, per-target stagger, and value
//! snapping. It says nothing about *which* values move; that lives in the
//! request's property maps.

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;

/// Snapping rule applied to interpolated values on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    /// No snapping; values interpolate continuously.
    #[default]
    None,
    /// Round the driven value to the nearest whole number each update.
    /// Counters use this so displayed text never shows fractions.
    WholeNumbers,
}

impl SnapMode {
    /// Apply this snapping rule to a value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::None => value,
            Self::WholeNumbers => value.round(),
        }
    }
}

/// Timing specification for a tween.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    /// Duration of the tween in milliseconds. Ignored for scrub-coupled
    /// tweens, whose progress is driven by scroll offset instead of time.
    pub duration_ms: f32,
    /// Delay before the tween starts in milliseconds.
    pub delay_ms: f32,
    /// Easing curve for the tween timing.
    pub easing: EasingCurve,
    /// Additional delay between consecutive targets of a batched tween,
    /// in milliseconds. 0 disables staggering.
    pub stagger_ms: f32,
    /// Value snapping applied on every update.
    pub snap: SnapMode,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: EasingCurve::CubicOut,
            stagger_ms: 0.0,
            snap: SnapMode::None,
        }
    }
}

impl TweenSpec {
    /// Create a tween spec with the given duration and easing.
    pub fn new(duration_ms: f32, easing: EasingCurve) -> Self {
        Self {
            duration_ms,
            easing,
            ..Self::default()
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the per-target stagger delay.
    pub fn with_stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Set the snapping rule.
    pub fn with_snap(mut self, snap: SnapMode) -> Self {
        self.snap = snap;
        self
    }

    /// Effective start delay for the target at `index` in a batched tween:
    /// `delay_ms + stagger_ms × index`.
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay_ms + self.stagger_ms * index as f32
    }
}
