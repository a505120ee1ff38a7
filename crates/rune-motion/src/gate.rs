//! Scroll gate descriptors.
//!
//! A scroll gate binds an animation's start (and optionally its continuous
//! progress) to where its trigger element sits in the viewport. Gates are
//! declarative: the engine's scroll observer evaluates them; this crate only
//! describes them.

use serde::{Deserialize, Serialize};

/// Which edge of the trigger element a trigger point watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementEdge {
    Top,
    Bottom,
}

/// A point in the scroll range, expressed as "the element's `edge` crosses
/// `viewport_fraction` of the viewport height, measured from the top".
///
/// "Element enters 85% down the viewport" is `(Top, 0.85)`; "element's top
/// enters the viewport bottom" is `(Top, 1.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerPoint {
    /// The element edge being watched.
    pub edge: ElementEdge,
    /// Viewport position as a fraction of viewport height from the top.
    pub viewport_fraction: f32,
}

impl TriggerPoint {
    /// Trigger when the element's top edge crosses the given viewport
    /// fraction.
    pub fn top_at(viewport_fraction: f32) -> Self {
        Self {
            edge: ElementEdge::Top,
            viewport_fraction,
        }
    }

    /// Trigger when the element's bottom edge crosses the given viewport
    /// fraction.
    pub fn bottom_at(viewport_fraction: f32) -> Self {
        Self {
            edge: ElementEdge::Bottom,
            viewport_fraction,
        }
    }
}

/// Gate parameters shared by every element an effect matches.
///
/// A template carries everything but the trigger element; `bind` attaches it
/// to a concrete node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateTemplate {
    /// Where the animation starts.
    pub start: TriggerPoint,
    /// Where the animation ends. Only meaningful for scrub-coupled gates.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<TriggerPoint>,
    /// Fire at most once for the life of the element.
    #[serde(default)]
    pub once: bool,
    /// Couple animation progress to scroll offset instead of time.
    #[serde(default)]
    pub scrub: bool,
}

impl GateTemplate {
    /// A gate starting at the given trigger point, with the engine's default
    /// replay-on-scroll-back behavior.
    pub fn starting_at(start: TriggerPoint) -> Self {
        Self {
            start,
            end: None,
            once: false,
            scrub: false,
        }
    }

    /// Fire at most once.
    pub fn fire_once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Couple progress to scroll between `start` and `end`.
    pub fn scrubbed_until(mut self, end: TriggerPoint) -> Self {
        self.end = Some(end);
        self.scrub = true;
        self
    }

    /// Attach this template to a concrete trigger element.
    pub fn bind(&self, trigger: impl Into<String>) -> ScrollGate {
        ScrollGate {
            trigger: trigger.into(),
            start: self.start,
            end: self.end,
            once: self.once,
            scrub: self.scrub,
        }
    }
}

/// A gate bound to its trigger element. Every gate references exactly one
/// trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollGate {
    /// Node id of the trigger element.
    pub trigger: String,
    /// Where the animation starts.
    pub start: TriggerPoint,
    /// Where the animation ends (scrub gates).
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<TriggerPoint>,
    /// Fire at most once for the life of the element.
    #[serde(default)]
    pub once: bool,
    /// Couple animation progress to scroll offset instead of time.
    #[serde(default)]
    pub scrub: bool,
}
