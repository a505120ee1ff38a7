//! Timeline specifications for load-time sequences.
//!
//! A `TimelineSpec` composes tweens into an ordered sequence where each step
//! either starts when the previous one ends or overlaps it by a fixed amount
//! (the hero entrance starts its subtitle 600 ms before the title finishes).
//! Start-time resolution is pure arithmetic so callers and tests can inspect
//! the schedule without an engine.
//!
//! # Example
//!
//! ```
//! use rune_motion::easing::EasingCurve;
//! use rune_motion::property::{PropertyMap, StyleProperty};
//! use rune_motion::timeline::TimelineSpec;
//! use rune_motion::tween::TweenSpec;
//!
//! let fade = |y: f64| {
//!     (
//!         PropertyMap::new().with(StyleProperty::TranslateY, y).with(StyleProperty::Opacity, 0.0),
//!         PropertyMap::new().with(StyleProperty::TranslateY, 0.0).with(StyleProperty::Opacity, 1.0),
//!     )
//! };
//! let (from, to) = fade(60.0);
//! let timeline = TimelineSpec::new()
//!     .step("title", from, to, TweenSpec::new(1000.0, EasingCurve::CubicOut));
//! assert_eq!(timeline.total_duration_ms(), 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::property::PropertyMap;
use crate::tween::TweenSpec;

/// Where a step starts relative to the previous step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepPosition {
    /// Start when the previous step ends (or at 0 for the first step).
    #[default]
    AfterPrevious,
    /// Start `ms` before the previous step's end, overlapping it.
    Overlap { ms: f32 },
}

/// One entry in a timeline: a target element animated from a start state to
/// an end state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Node id of the element this step animates.
    pub target: String,
    /// Style state applied before the step plays.
    pub from: PropertyMap,
    /// Style state the step animates towards.
    pub to: PropertyMap,
    /// Timing for this step.
    pub tween: TweenSpec,
    /// Start position relative to the previous step.
    pub position: StepPosition,
}

/// An ordered sequence of animation steps with relative start offsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    /// Steps in playback order.
    pub steps: Vec<TimelineStep>,
}

impl TimelineSpec {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step starting when the previous one ends.
    pub fn step(
        self,
        target: impl Into<String>,
        from: PropertyMap,
        to: PropertyMap,
        tween: TweenSpec,
    ) -> Self {
        self.step_at(target, from, to, tween, StepPosition::AfterPrevious)
    }

    /// Append a step that starts `overlap_ms` before the previous step's end.
    pub fn step_overlapping(
        self,
        overlap_ms: f32,
        target: impl Into<String>,
        from: PropertyMap,
        to: PropertyMap,
        tween: TweenSpec,
    ) -> Self {
        self.step_at(target, from, to, tween, StepPosition::Overlap { ms: overlap_ms })
    }

    /// Append a step at an explicit position.
    pub fn step_at(
        mut self,
        target: impl Into<String>,
        from: PropertyMap,
        to: PropertyMap,
        tween: TweenSpec,
        position: StepPosition,
    ) -> Self {
        self.steps.push(TimelineStep {
            target: target.into(),
            from,
            to,
            tween,
            position,
        });
        self
    }

    /// Number of steps in the timeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve the absolute start time of every step, in milliseconds.
    ///
    /// An `Overlap` that reaches past the timeline origin clamps to 0.
    pub fn resolved_start_times(&self) -> Vec<f32> {
        let mut starts = Vec::with_capacity(self.steps.len());
        let mut prev_end = 0.0f32;

        for step in &self.steps {
            let start = match step.position {
                StepPosition::AfterPrevious => prev_end,
                StepPosition::Overlap { ms } => (prev_end - ms).max(0.0),
            };
            prev_end = start + step.tween.delay_ms + step.tween.duration_ms;
            starts.push(start);
        }

        starts
    }

    /// Total duration of the timeline, accounting for overlaps.
    pub fn total_duration_ms(&self) -> f32 {
        let starts = self.resolved_start_times();
        self.steps
            .iter()
            .zip(starts)
            .map(|(step, start)| start + step.tween.delay_ms + step.tween.duration_ms)
            .fold(0.0, f32::max)
    }
}
