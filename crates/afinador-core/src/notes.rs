//! Reference pitches for standard 6-string guitar tuning and cents math.
//!
//! Cents are the logarithmic pitch distance `1200·log2(f/target)`; 100 cents
//! is one equal-temperament semitone. The matcher accepts a measured
//! frequency only when it lies within a configurable cents window of some
//! string, rejecting harmonics and non-string noise that land between or
//! outside the reference pitches.

use libm::log2f;

/// One reference pitch of the instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuitarNote {
    /// Display name, e.g. `"E2"`.
    pub name: &'static str,
    /// Target fundamental frequency in Hz.
    pub frequency: f32,
}

/// Standard tuning, low string first. Fixed at compile time, never mutated.
pub const STANDARD_TUNING: [GuitarNote; 6] = [
    GuitarNote { name: "E2", frequency: 82.41 },
    GuitarNote { name: "A2", frequency: 110.00 },
    GuitarNote { name: "D3", frequency: 146.83 },
    GuitarNote { name: "G3", frequency: 196.00 },
    GuitarNote { name: "B3", frequency: 246.94 },
    GuitarNote { name: "E4", frequency: 329.63 },
];

/// A measured frequency matched to one reference string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteMatch {
    /// Index into [`STANDARD_TUNING`].
    pub note_index: usize,
    /// The fine-scan frequency that produced this match, in Hz.
    pub frequency_hz: f32,
    /// Signed deviation from the matched string in cents.
    /// Always within `±cents_window` of zero.
    pub cents: f32,
}

impl NoteMatch {
    /// The matched reference note.
    pub fn note(&self) -> &'static GuitarNote {
        &STANDARD_TUNING[self.note_index]
    }
}

/// Signed pitch distance from `target_hz` to `freq_hz` in cents.
///
/// Positive means `freq_hz` is sharp of the target.
#[inline]
pub fn cents_between(freq_hz: f32, target_hz: f32) -> f32 {
    1200.0 * log2f(freq_hz / target_hz)
}

/// Match a frequency to the nearest reference string.
///
/// Computes the cents deviation against every string and keeps the smallest
/// absolute deviation. Returns `None` when even the nearest string is more
/// than `cents_window` cents away; such readings are spurious (harmonics,
/// broadband noise) rather than a mistuned string.
pub fn match_note(freq_hz: f32, cents_window: f32) -> Option<NoteMatch> {
    let mut best: Option<NoteMatch> = None;

    for (index, note) in STANDARD_TUNING.iter().enumerate() {
        let cents = cents_between(freq_hz, note.frequency);
        let closer = match best {
            Some(ref b) => cents.abs() < b.cents.abs(),
            None => true,
        };
        if closer {
            best = Some(NoteMatch {
                note_index: index,
                frequency_hz: freq_hz,
                cents,
            });
        }
    }

    best.filter(|m| m.cents.abs() <= cents_window)
}
