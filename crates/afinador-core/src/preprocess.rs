//! Frame conditioning: Hann window, pre-emphasis, and the silence gate.
//!
//! Plucked-string spectra carry most of their energy in the low end, which
//! lets a strong low harmonic or room rumble shadow the fundamental during
//! the scan. The first-order pre-emphasis filter `y[i] = x[i] - α·x[i-1]`
//! flattens that bias before any magnitude is measured. The Hann window runs
//! first so the frame edges taper to zero and spectral leakage stays out of
//! neighboring scan bins.
//!
//! The RMS gate is the pipeline's steady state: between plucks the room is
//! quiet, the gate trips, and nothing downstream runs. That is normal
//! control flow, not an error.

use alloc::vec;
use alloc::vec::Vec;
use libm::{cosf, sqrtf};

/// A windowed, pre-emphasized frame that passed the silence gate.
#[derive(Debug)]
pub struct Conditioned<'a> {
    /// The conditioned samples, valid until the next call on the owning
    /// [`Preprocessor`].
    pub samples: &'a [f32],
    /// RMS of the conditioned samples. Already known to be at or above the
    /// gate threshold.
    pub rms: f32,
}

/// Owns the window table and scratch buffer for frame conditioning.
///
/// Buffers are allocated once at construction; `condition` never allocates.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    window: Vec<f32>,
    buffer: Vec<f32>,
    pre_emphasis: f32,
    rms_gate: f32,
}

impl Preprocessor {
    /// Create a preprocessor for frames of `frame_len` samples.
    ///
    /// The Hann table uses the symmetric form `0.5·(1 - cos(2πi/(L-1)))`.
    /// The coarse-scan peak threshold was validated against this exact
    /// window; changing it changes magnitude scaling downstream.
    pub fn new(frame_len: usize, pre_emphasis: f32, rms_gate: f32) -> Self {
        debug_assert!(frame_len >= 2);
        let denom = (frame_len - 1) as f32;
        let window = (0..frame_len)
            .map(|i| 0.5 * (1.0 - cosf(core::f32::consts::TAU * i as f32 / denom)))
            .collect();

        Self {
            window,
            buffer: vec![0.0; frame_len],
            pre_emphasis,
            rms_gate,
        }
    }

    /// Frame length this preprocessor was built for.
    pub fn frame_len(&self) -> usize {
        self.window.len()
    }

    /// Window, pre-emphasize, and gate one frame.
    ///
    /// Returns `None` when the conditioned frame's RMS falls below the gate
    /// threshold — the expected outcome between plucks.
    ///
    /// # Panics
    ///
    /// Panics if `frame.len()` differs from the construction-time length.
    pub fn condition(&mut self, frame: &[f32]) -> Option<Conditioned<'_>> {
        assert_eq!(frame.len(), self.window.len(), "frame length mismatch");

        // Window first, then pre-emphasis over the windowed samples with
        // x[-1] = 0.
        let mut prev = 0.0f32;
        let mut sum_sq = 0.0f32;
        for ((out, &x), &w) in self.buffer.iter_mut().zip(frame).zip(&self.window) {
            let windowed = x * w;
            let y = windowed - self.pre_emphasis * prev;
            prev = windowed;
            *out = y;
            sum_sq += y * y;
        }

        let rms = sqrtf(sum_sq / self.buffer.len() as f32);
        if rms < self.rms_gate {
            return None;
        }

        Some(Conditioned {
            samples: &self.buffer,
            rms,
        })
    }
}
