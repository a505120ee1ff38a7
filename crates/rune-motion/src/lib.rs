//! Animation-engine contract and descriptor vocabulary for scroll-linked effects.
//!
//! This crate defines *what* an effect asks of an animation engine, never *how*
//! the engine plays it back. It provides:
//! - **Style descriptors**: animatable properties, values and property maps
//! - **Tween specs**: duration, delay, easing, stagger and snapping rules
//! - **Timeline specs**: ordered steps with overlap offsets
//! - **Scroll gates**: viewport-relative trigger descriptors (once/scrub)
//! - **Engine traits**: the injected capability an orchestrator drives
//!
//! # Architecture
//!
//! ```text
//! EngineProvider ── try_acquire() ──► AnimationEngine
//!   ├── animate(TweenRequest)        (gated or immediate tweens)
//!   ├── build_timeline(TimelineSpec) (load-time sequences)
//!   └── create_trigger(ScrollGate)   (standalone scroll callbacks)
//!                │
//!                └──► EffectHandle (disposal)
//! ```
//!
//! Concrete engines live outside this workspace; tests substitute a recording
//! double behind the same traits.

pub mod easing;
pub mod engine;
pub mod gate;
pub mod interpolate;
pub mod property;
pub mod timeline;
pub mod tween;

pub use easing::EasingCurve;
pub use engine::{
    AnimationEngine, EffectHandle, EngineError, EngineProvider, SharedEngine, TriggerCallback,
    TweenRequest, UpdateCallback,
};
pub use gate::{ElementEdge, GateTemplate, ScrollGate, TriggerPoint};
pub use interpolate::Interpolate;
pub use property::{InsetRect, PropertyMap, StyleProperty, StyleValue, StyleValueType};
pub use timeline::{StepPosition, TimelineSpec, TimelineStep};
pub use tween::{SnapMode, TweenSpec};
