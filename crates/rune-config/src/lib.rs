//! Rune effects configuration system
//!
//! This crate provides centralized configuration management for the effects
//! layer, loading settings from `rune.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the effects layer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EffectsConfig {
    /// Readiness-gate settings
    pub bootstrap: BootstrapConfig,
    /// Per-effect enable toggles
    pub effects: EffectToggles,
}

/// Readiness-gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Interval between engine/document readiness probes, in milliseconds
    pub poll_interval_ms: u64,
    /// Give up waiting for the engine after this long. None waits forever,
    /// matching the original's silent never-completes behavior
    pub max_wait_ms: Option<u64>,
}

/// Per-effect enable toggles. Everything is on by default
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectToggles {
    /// Scroll-gated fade-up entrances
    pub fade_up: bool,
    /// Staggered child entrances
    pub stagger: bool,
    /// Scroll-coupled parallax drift
    pub parallax: bool,
    /// Overshoot scale-in entrances
    pub scale_in: bool,
    /// Clip-mask reveals
    pub reveal: bool,
    /// Hero load-time timeline
    pub hero: bool,
    /// Numeric stat counters
    pub counters: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            max_wait_ms: None,
        }
    }
}

impl Default for EffectToggles {
    fn default() -> Self {
        Self {
            fade_up: true,
            stagger: true,
            parallax: true,
            scale_in: true,
            reveal: true,
            hero: true,
            counters: true,
        }
    }
}

impl EffectToggles {
    /// Look up a toggle by catalog effect name.
    ///
    /// Unknown names are enabled; the catalog owns the name set and a stale
    /// toggle should not silently kill a new effect.
    pub fn is_enabled(&self, name: &str) -> bool {
        match name {
            "fade-up" => self.fade_up,
            "stagger" => self.stagger,
            "parallax" => self.parallax,
            "scale-in" => self.scale_in,
            "reveal" => self.reveal,
            "hero" => self.hero,
            "counters" => self.counters,
            _ => true,
        }
    }
}

impl EffectsConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the rune.toml configuration file
    ///
    /// # Returns
    /// * `Ok(EffectsConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("rune.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Bootstrap settings
        if let Ok(val) = std::env::var("RUNE_EFFECTS_POLL_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.bootstrap.poll_interval_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_MAX_WAIT_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.bootstrap.max_wait_ms = Some(ms);
            }
        }

        // Effect toggles
        if let Ok(val) = std::env::var("RUNE_EFFECTS_FADE_UP") {
            self.effects.fade_up = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_STAGGER") {
            self.effects.stagger = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_PARALLAX") {
            self.effects.parallax = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_SCALE_IN") {
            self.effects.scale_in = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_REVEAL") {
            self.effects.reveal = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_HERO") {
            self.effects.hero = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("RUNE_EFFECTS_COUNTERS") {
            self.effects.counters = parse_bool(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
