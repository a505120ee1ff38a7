//! Installed-effect registry and disposal.
//!
//! Every registration the initializer makes lands here as a named handle.
//! Nothing is torn down implicitly; observers persist for the life of the
//! document. Long-lived hosts (single-page navigation) can still dispose
//! individual effects or everything at once.

use std::fmt;

use rune_motion::EffectHandle;

/// One registered effect and its engine-side handle.
pub struct InstalledEffect {
    /// Effect name (catalog name, "hero" or "counter").
    pub effect: String,
    /// The element the effect is keyed on, when there is a single one.
    pub node: Option<String>,
    handle: Box<dyn EffectHandle>,
}

impl InstalledEffect {
    /// Release the engine-side resources behind this effect. Idempotent.
    pub fn dispose(&mut self) {
        self.handle.dispose();
    }

    /// True once the effect has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }
}

impl fmt::Debug for InstalledEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstalledEffect")
            .field("effect", &self.effect)
            .field("node", &self.node)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Registry of everything the initializer installed.
#[derive(Debug, Default)]
pub struct EffectsRuntime {
    effects: Vec<InstalledEffect>,
}

impl EffectsRuntime {
    /// Create an empty runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registered effect.
    pub(crate) fn register(
        &mut self,
        effect: &str,
        node: Option<String>,
        handle: Box<dyn EffectHandle>,
    ) {
        self.effects.push(InstalledEffect {
            effect: effect.to_string(),
            node,
            handle,
        });
    }

    /// Total number of registered effects.
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Number of registrations for a named effect.
    pub fn count_for(&self, effect: &str) -> usize {
        self.effects.iter().filter(|e| e.effect == effect).count()
    }

    /// Iterate over registered effects.
    pub fn effects(&self) -> impl Iterator<Item = &InstalledEffect> {
        self.effects.iter()
    }

    /// Dispose every registration for a named effect. Returns how many
    /// handles were newly disposed.
    pub fn dispose_effect(&mut self, effect: &str) -> usize {
        let mut disposed = 0;
        for installed in self.effects.iter_mut().filter(|e| e.effect == effect) {
            if !installed.is_disposed() {
                installed.dispose();
                disposed += 1;
            }
        }
        disposed
    }

    /// Dispose everything.
    pub fn dispose_all(&mut self) {
        for installed in &mut self.effects {
            installed.dispose();
        }
    }
}
