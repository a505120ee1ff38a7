//! The animation-engine capability contract.
//!
//! The effect layer never talks to a concrete engine; it drives these traits.
//! A host injects an `EngineProvider`, the orchestrator acquires a
//! `SharedEngine` from it once the engine has loaded, and every registration
//! returns an `EffectHandle` so long-lived hosts can dispose observers they
//! no longer need.
//!
//! Contract notes engines must honor:
//! - `animate` applies the request's `from` state to every target at
//!   registration time, before any playback, so elements never flash their
//!   final state.
//! - A gate with `once` fires its animation at most once for the life of the
//!   element; without it, the engine's normal replay-on-scroll-back behavior
//!   applies.
//! - A gate with `scrub` couples progress to scroll offset between `start`
//!   and `end` instead of playing over time.
//! - `register_scroll_observer` is called exactly once before any gated
//!   registration; gated requests before registration are rejected with
//!   [`EngineError::ObserverNotRegistered`].

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::gate::ScrollGate;
use crate::property::PropertyMap;
use crate::timeline::TimelineSpec;
use crate::tween::TweenSpec;

/// Shared handle to an injected engine.
pub type SharedEngine = Arc<dyn AnimationEngine>;

/// Per-frame update callback. Receives the current interpolated value of the
/// driven numeric property (after snapping).
pub type UpdateCallback = Box<dyn FnMut(f64) + Send>;

/// Callback fired when a standalone scroll trigger's start point is crossed.
pub type TriggerCallback = Box<dyn FnMut() + Send>;

/// Errors an engine can surface for a registration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A gated request arrived before the scroll observer extension was
    /// registered.
    #[error("scroll observer extension is not registered")]
    ObserverNotRegistered,

    /// The engine cannot provide the scroll observer extension.
    #[error("scroll observer extension unavailable: {0}")]
    ExtensionUnavailable(String),

    /// The engine rejected the request.
    #[error("animation request rejected: {0}")]
    Rejected(String),
}

/// A tween over one or more target elements.
///
/// Batched targets share `from`/`to`/`tween`; `tween.delay_for(index)` gives
/// each target its staggered start delay.
pub struct TweenRequest {
    /// Node ids of the elements to animate, in sibling order.
    pub targets: Vec<String>,
    /// Style state applied to every target before playback.
    pub from: PropertyMap,
    /// Style state the tween animates towards.
    pub to: PropertyMap,
    /// Timing specification.
    pub tween: TweenSpec,
    /// Optional scroll gate. `None` plays immediately.
    pub gate: Option<ScrollGate>,
    /// Optional per-frame update callback.
    pub on_update: Option<UpdateCallback>,
}

impl TweenRequest {
    /// Create an ungated request.
    pub fn new(
        targets: Vec<String>,
        from: PropertyMap,
        to: PropertyMap,
        tween: TweenSpec,
    ) -> Self {
        Self {
            targets,
            from,
            to,
            tween,
            gate: None,
            on_update: None,
        }
    }

    /// Gate this request behind a scroll trigger.
    pub fn gated(mut self, gate: ScrollGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Attach a per-frame update callback.
    pub fn on_update(mut self, callback: UpdateCallback) -> Self {
        self.on_update = Some(callback);
        self
    }
}

impl fmt::Debug for TweenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenRequest")
            .field("targets", &self.targets)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("tween", &self.tween)
            .field("gate", &self.gate)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

/// Disposal handle for a registered effect.
///
/// Without disposal, engine-side observers persist for the life of the
/// document. Long-lived hosts call `dispose` when tearing a view down.
pub trait EffectHandle: Send {
    /// Release the engine-side resources behind this effect. Idempotent.
    fn dispose(&mut self);

    /// True once `dispose` has run.
    fn is_disposed(&self) -> bool;
}

/// The injected animation-engine capability.
///
/// Implementations use interior mutability; the orchestrator holds the engine
/// behind an `Arc` and registers effects from callbacks as well as from the
/// initialization path.
pub trait AnimationEngine: Send + Sync {
    /// Register a tween, gated or immediate. Applies `request.from` to every
    /// target before returning.
    fn animate(&self, request: TweenRequest) -> Result<Box<dyn EffectHandle>, EngineError>;

    /// Register an ordered sequence of tweens that starts playing
    /// immediately.
    fn build_timeline(&self, spec: TimelineSpec) -> Result<Box<dyn EffectHandle>, EngineError>;

    /// Register the scroll-observer extension. Called exactly once, before
    /// any gated registration.
    fn register_scroll_observer(&self) -> Result<(), EngineError>;

    /// Register a standalone scroll trigger that fires `on_fire` when the
    /// gate's start point is crossed (honoring `once`).
    fn create_trigger(
        &self,
        gate: ScrollGate,
        on_fire: TriggerCallback,
    ) -> Result<Box<dyn EffectHandle>, EngineError>;
}

/// Source of the engine capability.
///
/// The engine may not have loaded when initialization starts; `try_acquire`
/// returns `None` until it has. The readiness gate polls this.
pub trait EngineProvider: Send + Sync {
    /// The engine, if it has finished loading.
    fn try_acquire(&self) -> Option<SharedEngine>;
}
