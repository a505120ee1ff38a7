//! Shared test doubles: a scripted document and a recording engine.
//!
//! `FakeEngine` honors the parts of the engine contract the effect layer
//! relies on (from-state application at registration, `once` gates, scrub
//! coupling, stagger batching) and records everything else for assertions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rune_effects::{Document, DocumentReadyState, SharedDocument};
use rune_motion::{
    AnimationEngine, EffectHandle, EngineError, EngineProvider, InsetRect, Interpolate,
    PropertyMap, ScrollGate, SharedEngine, StyleProperty, StyleValue, TimelineSpec,
    TriggerCallback, TweenRequest, TweenSpec, UpdateCallback,
};

// ---------------------------------------------------------------------------
// FakeDocument
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeNode {
    classes: Vec<String>,
    text: String,
    attributes: HashMap<String, String>,
    children: Vec<String>,
}

/// An in-memory document with scripted elements.
#[derive(Default)]
pub struct FakeDocument {
    ready: Mutex<bool>,
    // Insertion order doubles as document order.
    nodes: Mutex<Vec<(String, FakeNode)>>,
}

impl FakeDocument {
    /// A document that is already parsed.
    pub fn ready() -> Arc<Self> {
        let doc = Self::default();
        *doc.ready.lock().unwrap() = true;
        Arc::new(doc)
    }

    /// A document still parsing; flip with `set_ready`.
    pub fn loading() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn shared(self: &Arc<Self>) -> SharedDocument {
        // Unsized coercion to the trait object happens in return position.
        let doc: SharedDocument = self.clone();
        doc
    }

    pub fn set_ready(&self, ready: bool) {
        *self.ready.lock().unwrap() = ready;
    }

    pub fn add_element(&self, id: &str, classes: &[&str]) {
        self.add_element_full(id, classes, "", &[]);
    }

    pub fn add_text_element(&self, id: &str, classes: &[&str], text: &str) {
        self.add_element_full(id, classes, text, &[]);
    }

    pub fn add_element_full(
        &self,
        id: &str,
        classes: &[&str],
        text: &str,
        attributes: &[(&str, &str)],
    ) {
        let node = FakeNode {
            classes: classes.iter().map(ToString::to_string).collect(),
            text: text.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        };
        self.nodes.lock().unwrap().push((id.to_string(), node));
    }

    /// Add a child element and link it under its parent, in sibling order.
    pub fn add_child(&self, parent: &str, id: &str) {
        self.add_element(id, &[]);
        let mut nodes = self.nodes.lock().unwrap();
        if let Some((_, node)) = nodes.iter_mut().find(|(nid, _)| nid == parent) {
            node.children.push(id.to_string());
        }
    }
}

impl Document for FakeDocument {
    fn ready_state(&self) -> DocumentReadyState {
        if *self.ready.lock().unwrap() {
            DocumentReadyState::Ready
        } else {
            DocumentReadyState::Loading
        }
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, node)| node.classes.iter().any(|c| c == class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn children_of(&self, node: &str) -> Vec<String> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == node)
            .map(|(_, n)| n.children.clone())
            .unwrap_or_default()
    }

    fn text_of(&self, node: &str) -> Option<String> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == node)
            .map(|(_, n)| n.text.clone())
    }

    fn set_text(&self, node: &str, text: &str) {
        let mut nodes = self.nodes.lock().unwrap();
        if let Some((_, n)) = nodes.iter_mut().find(|(id, _)| id == node) {
            n.text = text.to_string();
        }
    }

    fn attribute(&self, node: &str, name: &str) -> Option<String> {
        self.nodes
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == node)
            .and_then(|(_, n)| n.attributes.get(name).cloned())
    }
}

// ---------------------------------------------------------------------------
// FakeEngine
// ---------------------------------------------------------------------------

/// Cloneable record of an `animate` call, minus its callback.
#[derive(Debug, Clone)]
pub struct TweenSummary {
    pub targets: Vec<String>,
    pub from: PropertyMap,
    pub to: PropertyMap,
    pub tween: TweenSpec,
    pub gate: Option<ScrollGate>,
    pub has_update: bool,
}

struct TweenRecord {
    summary: TweenSummary,
    plays: usize,
}

struct TriggerRecord {
    gate: ScrollGate,
    fires: usize,
}

#[derive(Default)]
struct EngineState {
    observer_registrations: usize,
    applied: Vec<(String, PropertyMap)>,
    tweens: Vec<TweenRecord>,
    triggers: Vec<TriggerRecord>,
    timelines: Vec<TimelineSpec>,
}

/// A recording engine that honors once/scrub/batch semantics.
#[derive(Default)]
pub struct FakeEngine {
    state: Mutex<EngineState>,
    update_callbacks: Mutex<HashMap<usize, UpdateCallback>>,
    trigger_callbacks: Mutex<HashMap<usize, TriggerCallback>>,
    disposed: Arc<AtomicUsize>,
}

struct FakeHandle {
    disposed: bool,
    counter: Arc<AtomicUsize>,
}

impl EffectHandle for FakeHandle {
    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl FakeEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn shared(self: &Arc<Self>) -> SharedEngine {
        // Unsized coercion to the trait object happens in return position.
        let engine: SharedEngine = self.clone();
        engine
    }

    fn handle(&self) -> Box<dyn EffectHandle> {
        Box::new(FakeHandle {
            disposed: false,
            counter: Arc::clone(&self.disposed),
        })
    }

    // -- inspection --------------------------------------------------------

    pub fn observer_registrations(&self) -> usize {
        self.state.lock().unwrap().observer_registrations
    }

    pub fn tween_summaries(&self) -> Vec<TweenSummary> {
        self.state
            .lock()
            .unwrap()
            .tweens
            .iter()
            .map(|t| t.summary.clone())
            .collect()
    }

    pub fn find_tween_for(&self, target: &str) -> Option<TweenSummary> {
        self.tween_summaries()
            .into_iter()
            .find(|t| t.targets.iter().any(|n| n == target))
    }

    /// From-states applied to a node at registration time, in order.
    pub fn applied_states_for(&self, node: &str) -> Vec<PropertyMap> {
        self.state
            .lock()
            .unwrap()
            .applied
            .iter()
            .filter(|(id, _)| id == node)
            .map(|(_, state)| state.clone())
            .collect()
    }

    pub fn timelines(&self) -> Vec<TimelineSpec> {
        self.state.lock().unwrap().timelines.clone()
    }

    pub fn trigger_gates(&self) -> Vec<ScrollGate> {
        self.state
            .lock()
            .unwrap()
            .triggers
            .iter()
            .map(|t| t.gate.clone())
            .collect()
    }

    pub fn total_registrations(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.tweens.len() + state.triggers.len() + state.timelines.len()
    }

    pub fn disposed_count(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }

    // -- scroll driving ----------------------------------------------------

    /// Simulate the trigger element crossing its start point. Fires matching
    /// standalone triggers (honoring `once`) and returns how many fired.
    pub fn fire_trigger(&self, node: &str) -> usize {
        let fired: Vec<usize> = {
            let mut state = self.state.lock().unwrap();
            state
                .triggers
                .iter_mut()
                .enumerate()
                .filter(|(_, t)| t.gate.trigger == node && (!t.gate.once || t.fires == 0))
                .map(|(idx, t)| {
                    t.fires += 1;
                    idx
                })
                .collect()
        };

        // Run callbacks without holding any lock; a callback may register
        // new animations against this engine.
        for idx in &fired {
            let callback = self.trigger_callbacks.lock().unwrap().remove(idx);
            if let Some(mut callback) = callback {
                callback();
                let _ = self.trigger_callbacks.lock().unwrap().insert(*idx, callback);
            }
        }

        fired.len()
    }

    /// Simulate the trigger element crossing the start point of its gated
    /// tweens. Returns how many tweens (re)played, honoring `once`.
    pub fn play_gated(&self, node: &str) -> usize {
        let mut state = self.state.lock().unwrap();
        state
            .tweens
            .iter_mut()
            .filter(|t| {
                t.summary
                    .gate
                    .as_ref()
                    .is_some_and(|g| g.trigger == node && (!g.once || t.plays == 0))
            })
            .map(|t| t.plays += 1)
            .count()
    }

    /// Total completed plays of tweens gated on the given trigger.
    pub fn plays_for_trigger(&self, node: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .tweens
            .iter()
            .filter(|t| t.summary.gate.as_ref().is_some_and(|g| g.trigger == node))
            .map(|t| t.plays)
            .sum()
    }

    /// Drive one update frame at raw progress `t` for the tween animating
    /// `target`, invoking its update callback with the snapped value.
    pub fn update_progress(&self, target: &str, t: f32) {
        let found = {
            let state = self.state.lock().unwrap();
            state
                .tweens
                .iter()
                .enumerate()
                .find(|(_, rec)| {
                    rec.summary.has_update && rec.summary.targets.iter().any(|n| n == target)
                })
                .map(|(idx, rec)| (idx, rec.summary.clone()))
        };

        let Some((idx, summary)) = found else { return };
        let value = driven_value(&summary, t);

        let callback = self.update_callbacks.lock().unwrap().remove(&idx);
        if let Some(mut callback) = callback {
            callback(value);
            let _ = self.update_callbacks.lock().unwrap().insert(idx, callback);
        }
    }

    /// The scrub-coupled value of the tween gated on `node` at scroll
    /// progress `t`, without side effects.
    pub fn scrub_value_at(&self, node: &str, t: f32) -> Option<f64> {
        let state = self.state.lock().unwrap();
        let record = state.tweens.iter().find(|rec| {
            rec.summary
                .gate
                .as_ref()
                .is_some_and(|g| g.scrub && g.trigger == node)
        })?;
        Some(driven_value(&record.summary, t))
    }
}

/// Interpolated value of a tween's driven property at raw progress `t`.
fn driven_value(summary: &TweenSummary, t: f32) -> f64 {
    let property = driven_property(&summary.to).expect("tween with no end state");
    let to = summary.to.get(property).copied().expect("driven property");
    // A tween without a declared start animates from the property's rest
    // value, the way parallax drifts from wherever the element sits.
    let from = summary.from.get(property).copied().unwrap_or(zero_like(&to));

    let eased = summary.tween.easing.evaluate(t);
    let value = from.interpolate(&to, eased).magnitude();
    summary.tween.snap.apply(value)
}

fn zero_like(value: &StyleValue) -> StyleValue {
    match value {
        StyleValue::Scalar { .. } => StyleValue::scalar(0.0),
        StyleValue::Percent { .. } => StyleValue::percent(0.0),
        StyleValue::ClipInset { .. } => StyleValue::clip_inset(InsetRect::open()),
    }
}

fn driven_property(to: &PropertyMap) -> Option<StyleProperty> {
    const PREFERRED: [StyleProperty; 5] = [
        StyleProperty::TextValue,
        StyleProperty::TranslateYPercent,
        StyleProperty::TranslateY,
        StyleProperty::Opacity,
        StyleProperty::Scale,
    ];
    PREFERRED
        .into_iter()
        .find(|p| to.get(*p).is_some())
        .or_else(|| to.iter().next().map(|(p, _)| *p))
}

impl AnimationEngine for FakeEngine {
    fn animate(&self, request: TweenRequest) -> Result<Box<dyn EffectHandle>, EngineError> {
        let mut state = self.state.lock().unwrap();
        if request.gate.is_some() && state.observer_registrations == 0 {
            return Err(EngineError::ObserverNotRegistered);
        }

        // Contract: the start state lands on every target at registration.
        for target in &request.targets {
            state.applied.push((target.clone(), request.from.clone()));
        }

        let idx = state.tweens.len();
        let has_update = request.on_update.is_some();
        state.tweens.push(TweenRecord {
            summary: TweenSummary {
                targets: request.targets,
                from: request.from,
                to: request.to,
                tween: request.tween,
                gate: request.gate.clone(),
                has_update,
            },
            // Ungated tweens play immediately.
            plays: usize::from(request.gate.is_none()),
        });
        drop(state);

        if let Some(callback) = request.on_update {
            let _ = self.update_callbacks.lock().unwrap().insert(idx, callback);
        }

        Ok(self.handle())
    }

    fn build_timeline(&self, spec: TimelineSpec) -> Result<Box<dyn EffectHandle>, EngineError> {
        self.state.lock().unwrap().timelines.push(spec);
        Ok(self.handle())
    }

    fn register_scroll_observer(&self) -> Result<(), EngineError> {
        self.state.lock().unwrap().observer_registrations += 1;
        Ok(())
    }

    fn create_trigger(
        &self,
        gate: ScrollGate,
        on_fire: TriggerCallback,
    ) -> Result<Box<dyn EffectHandle>, EngineError> {
        let mut state = self.state.lock().unwrap();
        if state.observer_registrations == 0 {
            return Err(EngineError::ObserverNotRegistered);
        }

        let idx = state.triggers.len();
        state.triggers.push(TriggerRecord { gate, fires: 0 });
        drop(state);

        let _ = self.trigger_callbacks.lock().unwrap().insert(idx, on_fire);
        Ok(self.handle())
    }
}

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

/// Provider that yields the engine after a fixed number of probes.
pub struct CountingProvider {
    engine: Arc<FakeEngine>,
    ready_after_probes: usize,
    probes: AtomicUsize,
}

impl CountingProvider {
    /// `ready_after_probes = 0` makes the engine available immediately.
    pub fn new(engine: &Arc<FakeEngine>, ready_after_probes: usize) -> Self {
        Self {
            engine: Arc::clone(engine),
            ready_after_probes,
            probes: AtomicUsize::new(0),
        }
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl EngineProvider for CountingProvider {
    fn try_acquire(&self) -> Option<SharedEngine> {
        let probe = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
        if probe > self.ready_after_probes {
            Some(self.engine.shared())
        } else {
            None
        }
    }
}

/// Provider whose engine never loads.
pub struct NeverProvider;

impl EngineProvider for NeverProvider {
    fn try_acquire(&self) -> Option<SharedEngine> {
        None
    }
}

/// Immediately-available provider for tests that don't count probes.
pub fn ready_provider(engine: &Arc<FakeEngine>) -> Box<CountingProvider> {
    Box::new(CountingProvider::new(engine, 0))
}
