//! Numeric stat counters.
//!
//! Each `.stat-number` element counts up from 0 to its target when scrolled
//! into view, once. The target comes from the `data-value` attribute, falling
//! back to the element's visible text when the attribute is absent or empty.
//! An element with no numeric target anywhere is skipped with a warning
//! rather than animated towards garbage.

use std::sync::Arc;

use tracing::warn;

use rune_motion::{
    EasingCurve, GateTemplate, PropertyMap, SharedEngine, SnapMode, StyleProperty, TriggerCallback,
    TriggerPoint, TweenRequest, TweenSpec,
};

use crate::document::SharedDocument;
use crate::error::EffectsError;
use crate::runtime::EffectsRuntime;

/// Class selector for stat counter elements.
pub const CLASS_STAT_NUMBER: &str = "stat-number";
/// Attribute carrying the counter's target value.
pub const VALUE_ATTRIBUTE: &str = "data-value";

/// Counter playback duration.
const COUNT_DURATION_MS: f32 = 2000.0;

/// Resolve a counter's target value.
///
/// A present, non-empty attribute wins; only an absent or empty attribute
/// falls back to the element text. Parsing takes the leading integer the way
/// lenient numeric-text parsers do: skip leading whitespace, accept an
/// optional sign, stop at the first non-digit.
pub fn counter_target(attribute: Option<&str>, text: &str) -> Option<i64> {
    match attribute {
        Some(raw) if !raw.trim().is_empty() => parse_leading_int(raw),
        _ => parse_leading_int(text),
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Install count-up triggers for every stat element in the document.
pub fn install(
    document: &SharedDocument,
    engine: &SharedEngine,
    runtime: &mut EffectsRuntime,
) -> Result<(), EffectsError> {
    for node in document.elements_with_class(CLASS_STAT_NUMBER) {
        let attribute = document.attribute(&node, VALUE_ATTRIBUTE);
        let text = document.text_of(&node).unwrap_or_default();

        let Some(target) = counter_target(attribute.as_deref(), &text) else {
            warn!(node = %node, "stat counter has no numeric target, skipping");
            continue;
        };

        let gate = GateTemplate::starting_at(TriggerPoint::top_at(0.85))
            .fire_once()
            .bind(node.as_str());

        let handle = engine.create_trigger(gate, count_up(engine, document, &node, target))?;
        runtime.register("counter", Some(node), handle);
    }

    Ok(())
}

/// The on-fire callback: animate the element's numeric text from 0 to
/// `target`, rounding the displayed value on every update.
fn count_up(
    engine: &SharedEngine,
    document: &SharedDocument,
    node: &str,
    target: i64,
) -> TriggerCallback {
    let engine = Arc::clone(engine);
    let document = Arc::clone(document);
    let node = node.to_string();

    Box::new(move || {
        let write_document = Arc::clone(&document);
        let write_node = node.clone();

        let request = TweenRequest::new(
            vec![node.clone()],
            PropertyMap::new().with(StyleProperty::TextValue, 0.0),
            PropertyMap::new().with(StyleProperty::TextValue, target as f64),
            TweenSpec::new(COUNT_DURATION_MS, EasingCurve::QuadOut)
                .with_snap(SnapMode::WholeNumbers),
        )
        .on_update(Box::new(move |value| {
            write_document.set_text(&write_node, &format!("{}", value.round() as i64));
        }));

        if let Err(err) = engine.animate(request) {
            warn!(node = %node, error = %err, "counter animation rejected");
        }
    })
}
