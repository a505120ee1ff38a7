//! Crate-level error types.

use thiserror::Error;

use rune_motion::EngineError;

/// Errors produced while installing effects.
#[derive(Debug, Error)]
pub enum EffectsError {
    /// The animation engine never became available within the configured
    /// wait bound. Only surfaced when `bootstrap.max_wait_ms` is set; the
    /// default configuration waits indefinitely.
    #[error("animation engine did not become available within {waited_ms} ms")]
    EngineUnavailable { waited_ms: u64 },

    /// The engine rejected a registration.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
