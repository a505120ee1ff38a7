//! Interpolation for style values.
//!
//! The `Interpolate` trait gives engine implementations and test doubles one
//! shared meaning for "the value at progress t between two states". Values of
//! mismatched kinds cannot blend; they snap to the target value.

use crate::property::{InsetRect, StyleValue};

/// Trait for types that can be interpolated between two values.
///
/// When t = 0.0, returns self.
/// When t = 1.0, returns to.
/// Values between 0.0 and 1.0 return intermediate values.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value at factor t.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

/// Linear interpolation helper for f64 values.
#[inline]
fn lerp_f64(from: f64, to: f64, t: f32) -> f64 {
    from + (to - from) * f64::from(t)
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f64(*self, *to, t)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for InsetRect {
    /// Interpolate each edge independently.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            top: lerp_f64(self.top, to.top, t),
            right: lerp_f64(self.right, to.right, t),
            bottom: lerp_f64(self.bottom, to.bottom, t),
            left: lerp_f64(self.left, to.left, t),
        }
    }
}

impl Interpolate for StyleValue {
    /// Interpolate matching value kinds; mismatched kinds snap to `to`.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        match (self, to) {
            (Self::Scalar { value: a }, Self::Scalar { value: b }) => Self::Scalar {
                value: lerp_f64(*a, *b, t),
            },
            (Self::Percent { value: a }, Self::Percent { value: b }) => Self::Percent {
                value: lerp_f64(*a, *b, t),
            },
            (Self::ClipInset { insets: a }, Self::ClipInset { insets: b }) => Self::ClipInset {
                insets: a.interpolate(b, t),
            },
            _ => *to,
        }
    }
}
