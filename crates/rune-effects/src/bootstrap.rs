//! Engine readiness gate.
//!
//! The host may load the animation engine after this crate's entry point
//! runs, and the document may still be parsing. `EngineGate` is the single
//! suspension point that absorbs both: it probes the injected provider and
//! the document's ready state at a fixed interval, and resolves once both
//! are available. The resolution is memoized, so repeated entry-point
//! invocations share one engine acquisition and exactly one scroll-observer
//! registration.
//!
//! With the default configuration the gate waits indefinitely: an engine
//! that never loads means initialization silently never completes. Setting
//! `bootstrap.max_wait_ms` surfaces [`EffectsError::EngineUnavailable`]
//! instead.

use std::time::Duration;

use tokio::sync::OnceCell;
use tokio::time::sleep;
use tracing::{debug, info};

use rune_config::BootstrapConfig;
use rune_motion::{EngineProvider, SharedEngine};

use crate::document::{DocumentReadyState, SharedDocument};
use crate::error::EffectsError;

/// Memoized async readiness gate for the animation engine.
pub struct EngineGate {
    provider: Box<dyn EngineProvider>,
    document: SharedDocument,
    poll_interval: Duration,
    max_wait: Option<Duration>,
    resolved: OnceCell<SharedEngine>,
}

impl EngineGate {
    /// Create a gate over the given provider and document.
    pub fn new(
        provider: Box<dyn EngineProvider>,
        document: SharedDocument,
        config: &BootstrapConfig,
    ) -> Self {
        Self {
            provider,
            document,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_wait: config.max_wait_ms.map(Duration::from_millis),
            resolved: OnceCell::new(),
        }
    }

    /// The engine, once both it and the document are ready.
    ///
    /// The first caller drives the probe loop and registers the scroll
    /// observer; concurrent and later callers await the same resolution.
    pub async fn engine(&self) -> Result<SharedEngine, EffectsError> {
        self.resolved
            .get_or_try_init(|| self.resolve())
            .await
            .map(SharedEngine::clone)
    }

    async fn resolve(&self) -> Result<SharedEngine, EffectsError> {
        let mut waited = Duration::ZERO;

        loop {
            let document_ready = self.document.ready_state() == DocumentReadyState::Ready;
            if document_ready {
                if let Some(engine) = self.provider.try_acquire() {
                    engine.register_scroll_observer()?;
                    info!("animation engine ready, scroll observer registered");
                    return Ok(engine);
                }
            }

            debug!(
                document_ready,
                waited_ms = waited.as_millis() as u64,
                "animation engine not yet available"
            );

            if let Some(max_wait) = self.max_wait {
                if waited >= max_wait {
                    return Err(EffectsError::EngineUnavailable {
                        waited_ms: waited.as_millis() as u64,
                    });
                }
            }

            sleep(self.poll_interval).await;
            waited += self.poll_interval;
        }
    }
}

impl std::fmt::Debug for EngineGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineGate")
            .field("poll_interval", &self.poll_interval)
            .field("max_wait", &self.max_wait)
            .field("resolved", &self.resolved.initialized())
            .finish()
    }
}
