//! Scroll-linked effects orchestration.
//!
//! This crate is the glue between a document and an injected animation
//! engine: it selects elements by class name, declares animation parameters,
//! and binds them to scroll position or load order. It implements no
//! animation playback itself.
//!
//! # Architecture
//!
//! ```text
//! install(document, provider, config)
//!   └── EngineGate ── polls provider + document readiness, registers the
//!       │             scroll observer once, memoizes the engine
//!       ├── catalog  ── five declarative scroll-gated effects (data, not code)
//!       ├── hero     ── load-time entrance timeline
//!       └── counter  ── one-shot numeric count-up on stat elements
//!              │
//!              └──► EffectsRuntime (named disposal handles)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use rune_config::EffectsConfig;
//! use rune_effects::install;
//!
//! let runtime = install(document, provider, EffectsConfig::load()).await?;
//! // ... later, in a long-lived host:
//! runtime.dispose_all();
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod counter;
pub mod document;
pub mod error;
pub mod hero;
pub mod install;
pub mod runtime;

pub use bootstrap::EngineGate;
pub use catalog::{EffectSpec, TargetMode};
pub use document::{Document, DocumentReadyState, SharedDocument};
pub use error::EffectsError;
pub use install::{install, EffectsInitializer};
pub use runtime::{EffectsRuntime, InstalledEffect};
