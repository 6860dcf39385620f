//! Directive rendering for text and JSON output.

use afinador_core::{Guidance, TuningDirective};
use serde::Serialize;

/// JSON shape for one emitted directive.
#[derive(Serialize)]
struct DirectiveRecord<'a> {
    note: &'a str,
    frequency_hz: f32,
    cents: f32,
    guidance: &'a str,
}

fn guidance_label(guidance: Guidance) -> &'static str {
    match guidance {
        Guidance::TooLow => "too-low",
        Guidance::TooHigh => "too-high",
        Guidance::InTune => "in-tune",
    }
}

/// Human-readable one-liner, e.g. `E2  -7.3 cents  tune up`.
pub fn render_text(directive: &TuningDirective) -> String {
    let action = match directive.guidance {
        Guidance::TooLow => "tune up",
        Guidance::TooHigh => "tune down",
        Guidance::InTune => "in tune",
    };
    format!(
        "{:<3} {:>8.2} Hz {:>+7.1} cents  {}",
        directive.note_name, directive.frequency_hz, directive.cents, action
    )
}

/// Line-delimited JSON record for machine consumers.
pub fn render_json(directive: &TuningDirective) -> String {
    let record = DirectiveRecord {
        note: directive.note_name,
        frequency_hz: directive.frequency_hz,
        cents: directive.cents,
        guidance: guidance_label(directive.guidance),
    };
    // Serialization of this struct cannot fail.
    serde_json::to_string(&record).unwrap_or_default()
}
