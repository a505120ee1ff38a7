//! Style-state descriptors for effect targets.
//!
//! This module defines the vocabulary an effect uses to declare start and end
//! states:
//! - `StyleProperty`: the animatable properties the built-in effects touch
//! - `StyleValue`: the value types those properties carry
//! - `InsetRect`: per-edge clip percentages for mask reveals
//! - `PropertyMap`: a property → value state (an AnimationTarget's start or
//!   end state)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Animatable style properties.
///
/// These are the properties the effect layer declares; the engine is
/// responsible for mapping them onto whatever its host styling system calls
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    /// Vertical offset in pixels.
    TranslateY,
    /// Vertical offset as a percentage of the element's own height.
    /// Scroll-coupled parallax drives this.
    TranslateYPercent,
    /// Opacity from 0.0 (transparent) to 1.0 (opaque).
    Opacity,
    /// Uniform scale factor (1.0 = natural size).
    Scale,
    /// Clip mask insets, as percentages of the element's box.
    ClipInset,
    /// Numeric text content. Counters animate this and write the rounded
    /// value back into the element's visible text on every update.
    TextValue,
}

impl StyleProperty {
    /// Returns the expected value type for this property.
    pub fn value_type(&self) -> StyleValueType {
        match self {
            Self::TranslateY | Self::Opacity | Self::Scale | Self::TextValue => {
                StyleValueType::Scalar
            }
            Self::TranslateYPercent => StyleValueType::Percent,
            Self::ClipInset => StyleValueType::ClipInset,
        }
    }

    /// Returns true if this property is resolved against the element's own
    /// box rather than carrying an absolute value.
    pub fn is_box_relative(&self) -> bool {
        matches!(self, Self::TranslateYPercent | Self::ClipInset)
    }
}

/// Expected value type for a style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValueType {
    Scalar,
    Percent,
    ClipInset,
}

/// Per-edge clip insets, each a percentage of the element's box.
///
/// `InsetRect::from_top(100.0)` hides the element behind a full-height top
/// inset; animating towards `InsetRect::open()` reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InsetRect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl InsetRect {
    /// A fully open mask (no inset on any edge).
    pub fn open() -> Self {
        Self::default()
    }

    /// A mask inset from the top edge only.
    pub fn from_top(percent: f64) -> Self {
        Self {
            top: percent,
            ..Self::default()
        }
    }

    /// True if no edge is inset.
    pub fn is_open(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// A value carried by a style property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleValue {
    /// Plain numeric value (pixels, opacity, scale factor, counter value).
    Scalar { value: f64 },
    /// Percentage value, resolved against the element's own box.
    Percent { value: f64 },
    /// Clip mask insets.
    ClipInset {
        #[serde(flatten)]
        insets: InsetRect,
    },
}

impl StyleValue {
    /// Plain numeric value.
    pub fn scalar(value: f64) -> Self {
        Self::Scalar { value }
    }

    /// Percentage value.
    pub fn percent(value: f64) -> Self {
        Self::Percent { value }
    }

    /// Clip mask insets.
    pub fn clip_inset(insets: InsetRect) -> Self {
        Self::ClipInset { insets }
    }

    /// Try to extract a scalar value.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar { value } => Some(*value),
            _ => None,
        }
    }

    /// Try to extract a percentage value.
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Percent { value } => Some(*value),
            _ => None,
        }
    }

    /// Try to extract clip insets.
    pub fn as_clip_inset(&self) -> Option<InsetRect> {
        match self {
            Self::ClipInset { insets } => Some(*insets),
            _ => None,
        }
    }

    /// The numeric magnitude of this value, regardless of unit. Update
    /// callbacks receive this for the driven property.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Scalar { value } | Self::Percent { value } => *value,
            Self::ClipInset { insets } => insets.top,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Scalar { value: v }
    }
}

impl From<InsetRect> for StyleValue {
    fn from(insets: InsetRect) -> Self {
        Self::ClipInset { insets }
    }
}

/// A style state: one value per declared property.
///
/// Every effect declares a start state and an end state as `PropertyMap`s;
/// the engine applies the start state to each target at registration time,
/// before any playback, so elements never flash their final state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyMap {
    values: HashMap<StyleProperty, StyleValue>,
}

impl PropertyMap {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property value (builder style).
    pub fn with(mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.values.insert(property, value.into());
        self
    }

    /// Set a property value.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        self.values.insert(property, value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    /// Check if the state declares no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all property-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &StyleValue)> {
        self.values.iter()
    }
}
