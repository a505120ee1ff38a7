//! Easing curves for effect timing.
//!
//! This module implements the timing functions the built-in effects declare:
//! - Linear (scrub-coupled effects)
//! - QuadOut / CubicOut (decelerating entrances)
//! - CubicInOut (smooth mask reveals)
//! - BackOut (overshoot entrances)
//! - CubicBezier (custom curves)
//!
//! Evaluation is pure; engines and test doubles share it as the reference
//! meaning of each descriptor.
//!
//! # Usage
//!
//! ```
//! use rune_motion::easing::EasingCurve;
//!
//! let ease = EasingCurve::CubicOut;
//! let progress = ease.evaluate(0.5); // Get eased progress at 50%
//!
//! let overshoot = EasingCurve::back_out(1.7);
//! let progress = overshoot.evaluate(0.5);
//! ```

use serde::{Deserialize, Serialize};

/// Easing curve for effect timing.
///
/// Easing curves map a linear progress value (0.0 to 1.0) to an eased output
/// value, controlling the rate of change over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingCurve {
    /// Linear interpolation (no easing). Scrub-coupled effects use this so
    /// animation progress tracks scroll offset exactly.
    Linear,

    /// Quadratic deceleration: `1 - (1-t)²`. Fast start, gentle settle.
    QuadOut,

    /// Cubic deceleration: `1 - (1-t)³`. The standard entrance curve for the
    /// built-in fade/stagger effects.
    CubicOut,

    /// Cubic ease-in-out: slow start and end, fast middle. Used by the mask
    /// reveal effect.
    CubicInOut,

    /// Decelerating overshoot: the value passes its target and settles back.
    /// `overshoot` controls how far past 1.0 the curve peaks.
    BackOut { overshoot: f32 },

    /// Custom cubic bezier curve.
    /// Parameters: (x1, y1, x2, y2) - control points.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::CubicOut
    }
}

impl EasingCurve {
    /// Evaluate the easing curve at the given progress.
    ///
    /// # Arguments
    /// * `t` - Progress value from 0.0 to 1.0
    ///
    /// # Returns
    /// Eased progress value (may exceed 1.0 for `BackOut` and some bezier
    /// curves).
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to valid range
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
            Self::BackOut { overshoot } => {
                let s = *overshoot;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Create a decelerating overshoot curve.
    ///
    /// # Arguments
    /// * `overshoot` - Overshoot factor (must be >= 0)
    ///
    /// # Panics
    /// Panics if overshoot is negative.
    pub fn back_out(overshoot: f32) -> Self {
        assert!(overshoot >= 0.0, "Overshoot factor must be >= 0");
        Self::BackOut { overshoot }
    }

    /// Create a custom cubic bezier easing curve.
    ///
    /// # Arguments
    /// * `x1`, `y1` - First control point
    /// * `x2`, `y2` - Second control point
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

/// Evaluate a cubic bezier curve at time t.
///
/// This implementation uses Newton-Raphson iteration to find the t parameter
/// on the bezier curve corresponding to the input progress, then evaluates
/// the y coordinate at that point.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    // Handle edge cases
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    // Find the t parameter that gives us the desired x value
    let t = solve_bezier_x(x1, x2, progress);

    // Evaluate the y coordinate at t
    bezier_y(y1, y2, t)
}

/// Solve for t in the bezier x equation using Newton-Raphson iteration.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    // Initial guess
    let mut t = target_x;

    // Newton-Raphson iteration
    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// Calculate x coordinate on the bezier curve at parameter t.
/// Bezier formula: x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f32, x2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

/// Calculate y coordinate on the bezier curve at parameter t.
#[inline]
fn bezier_y(y1: f32, y2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

/// Calculate derivative of x with respect to t.
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}
