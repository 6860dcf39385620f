//! Single-bin magnitude estimation via the Goertzel algorithm.
//!
//! The Goertzel recurrence evaluates the energy of a signal at one specific
//! frequency without computing a full transform:
//!
//! ```text
//! s[n] = x[n] + coeff * s[n-1] - s[n-2]
//! coeff = 2 * cos(2π * freq / sample_rate)
//! ```
//!
//! After the last sample the two trailing state values reconstruct the
//! complex bin, and `sqrt(re² + im²)` is the magnitude. O(L) time, O(1)
//! extra memory per call. The tuner only probes a handful of discrete
//! frequencies per frame, which is exactly the regime where this beats a
//! full spectral transform.
//!
//! # Reference
//!
//! G. Goertzel, "An Algorithm for the Evaluation of Finite Trigonometric
//! Series", American Mathematical Monthly 65(1), 1958.

use libm::{cosf, sinf, sqrtf};

/// Magnitude of `samples` at `freq_hz`.
///
/// Pure and deterministic; the caller is expected to have windowed and
/// filtered the frame already. Magnitudes are comparable only between calls
/// over the same frame.
pub fn magnitude(samples: &[f32], freq_hz: f32, sample_rate: f32) -> f32 {
    let omega = core::f32::consts::TAU * freq_hz / sample_rate;
    let coeff = 2.0 * cosf(omega);

    let mut s_prev = 0.0f32;
    let mut s_prev2 = 0.0f32;
    for &x in samples {
        let s = x + coeff * s_prev - s_prev2;
        s_prev2 = s_prev;
        s_prev = s;
    }

    let re = s_prev - s_prev2 * cosf(omega);
    let im = s_prev2 * sinf(omega);
    sqrtf(re * re + im * im)
}
