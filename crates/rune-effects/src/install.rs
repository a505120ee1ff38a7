//! The effects initializer: the crate's single entry point.
//!
//! `install` waits behind the readiness gate, then walks the selector
//! catalog, the hero timeline and the counters, registering each against the
//! engine. Selectors that match nothing are inert; a disabled toggle skips
//! its effect entirely.

use tracing::{debug, info};

use rune_config::EffectsConfig;
use rune_motion::{EngineProvider, SharedEngine, TweenRequest};

use crate::bootstrap::EngineGate;
use crate::catalog::{self, EffectSpec, TargetMode};
use crate::counter;
use crate::document::SharedDocument;
use crate::error::EffectsError;
use crate::hero;
use crate::runtime::EffectsRuntime;

/// Install all effects on the given document. Resolves once the engine has
/// loaded and the document is parsed; see [`EngineGate`] for the waiting
/// semantics.
pub async fn install(
    document: SharedDocument,
    provider: Box<dyn EngineProvider>,
    config: EffectsConfig,
) -> Result<EffectsRuntime, EffectsError> {
    EffectsInitializer::new(document, provider, config).run().await
}

/// Wires the catalog, hero timeline and counters once the engine is ready.
pub struct EffectsInitializer {
    document: SharedDocument,
    gate: EngineGate,
    config: EffectsConfig,
}

impl EffectsInitializer {
    /// Create an initializer over the given document and engine provider.
    pub fn new(
        document: SharedDocument,
        provider: Box<dyn EngineProvider>,
        config: EffectsConfig,
    ) -> Self {
        let gate = EngineGate::new(provider, document.clone(), &config.bootstrap);
        Self {
            document,
            gate,
            config,
        }
    }

    /// Wait for readiness, then register every enabled effect.
    pub async fn run(self) -> Result<EffectsRuntime, EffectsError> {
        let engine = self.gate.engine().await?;
        let mut runtime = EffectsRuntime::new();

        for spec in catalog::builtin() {
            if !self.config.effects.is_enabled(&spec.name) {
                debug!(effect = %spec.name, "effect disabled by config");
                continue;
            }
            self.install_catalog_effect(&engine, &spec, &mut runtime)?;
        }

        if self.config.effects.hero {
            if let Some(handle) = hero::install(&self.document, &engine)? {
                runtime.register("hero", None, handle);
            }
        }

        if self.config.effects.counters {
            counter::install(&self.document, &engine, &mut runtime)?;
        }

        info!(effects = runtime.effect_count(), "scroll effects initialized");
        Ok(runtime)
    }

    /// Register one catalog row against every matching element.
    fn install_catalog_effect(
        &self,
        engine: &SharedEngine,
        spec: &EffectSpec,
        runtime: &mut EffectsRuntime,
    ) -> Result<(), EffectsError> {
        let matches = self.document.elements_with_class(&spec.class);
        if matches.is_empty() {
            debug!(effect = %spec.name, class = %spec.class, "no matching elements");
            return Ok(());
        }

        for node in matches {
            let targets = match spec.target {
                TargetMode::SelfElement => vec![node.clone()],
                TargetMode::DirectChildren => {
                    let children = self.document.children_of(&node);
                    if children.is_empty() {
                        debug!(effect = %spec.name, node = %node, "container has no children");
                        continue;
                    }
                    children
                }
            };

            let request = TweenRequest::new(
                targets,
                spec.from.clone(),
                spec.to.clone(),
                spec.tween.clone(),
            )
            .gated(spec.gate.bind(node.as_str()));

            let handle = engine.animate(request)?;
            runtime.register(&spec.name, Some(node), handle);
        }

        Ok(())
    }
}
