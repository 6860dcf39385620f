//! Temporal debouncing of match results.
//!
//! A single frame is not evidence of a sustained pitch: transients at the
//! pluck, room noise, and scan jitter all produce one-off matches. The
//! debouncer keeps a short ring-buffer history of recent match results and
//! only emits a [`TuningDirective`] when the current match also dominates
//! the recent past (quorum out of history, default 3 of 4).

use alloc::vec;
use alloc::vec::Vec;

use crate::notes::{NoteMatch, STANDARD_TUNING};

/// Coarse correction hint derived from the cents deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// More than the deadband flat: tighten the string.
    TooLow,
    /// Within the deadband either side of zero: leave it alone.
    InTune,
    /// More than the deadband sharp: loosen the string.
    TooHigh,
}

/// Stable tuning output, emitted only after the debounce quorum is met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningDirective {
    /// Index of the matched string in [`STANDARD_TUNING`].
    pub note_index: usize,
    /// Display name of the matched string.
    pub note_name: &'static str,
    /// Measured fundamental in Hz.
    pub frequency_hz: f32,
    /// Signed deviation from the target pitch in cents.
    pub cents: f32,
    /// Correction hint with a dead zone around zero to avoid chatter.
    pub guidance: Guidance,
}

/// Ring buffer of recent match indices plus the quorum rule.
///
/// Owned by one engine and mutated once per pipeline pass; there are no
/// process-wide globals and no sharing across passes.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// `None` entries are passes where the matcher rejected the frame.
    history: Vec<Option<usize>>,
    /// Next slot to overwrite (FIFO over the fixed window).
    cursor: usize,
    quorum: usize,
    deadband_cents: f32,
}

impl Debouncer {
    /// Create a debouncer with an all-empty history.
    pub fn new(history_len: usize, quorum: usize, deadband_cents: f32) -> Self {
        debug_assert!(history_len >= 1 && quorum >= 1 && quorum <= history_len);
        Self {
            history: vec![None; history_len],
            cursor: 0,
            quorum,
            deadband_cents,
        }
    }

    /// Record one pass's match result; emit a directive if the quorum holds.
    ///
    /// The just-recorded result counts toward its own quorum, so with the
    /// defaults a note must have matched in 3 of the last 4 passes
    /// (including this one) before anything is emitted. Passes that never
    /// produced a fine frequency must not call this — their history slot is
    /// simply skipped, per the pipeline's short-circuit rules.
    pub fn observe(&mut self, result: Option<&NoteMatch>) -> Option<TuningDirective> {
        let index = result.map(|m| m.note_index);
        self.history[self.cursor] = index;
        self.cursor = (self.cursor + 1) % self.history.len();

        let m = result?;
        let agreeing = self
            .history
            .iter()
            .filter(|&&h| h == Some(m.note_index))
            .count();
        if agreeing < self.quorum {
            return None;
        }

        Some(TuningDirective {
            note_index: m.note_index,
            note_name: STANDARD_TUNING[m.note_index].name,
            frequency_hz: m.frequency_hz,
            cents: m.cents,
            guidance: self.guidance_for(m.cents),
        })
    }

    /// Clear the history back to the initial all-empty state.
    pub fn reset(&mut self) {
        self.history.fill(None);
        self.cursor = 0;
    }

    fn guidance_for(&self, cents: f32) -> Guidance {
        if cents < -self.deadband_cents {
            Guidance::TooLow
        } else if cents > self.deadband_cents {
            Guidance::TooHigh
        } else {
            Guidance::InTune
        }
    }
}
