//! Two-pass Goertzel frequency search: coarse grid, then fine refinement.
//!
//! The coarse pass sweeps the whole guitar fundamental range on a wide grid
//! and picks the strongest qualifying local maximum. The fine pass then
//! sweeps a narrow window around that estimate at a much smaller step. Both
//! passes probe single frequencies with [`goertzel::magnitude`], so the cost
//! per frame stays proportional to the number of grid points rather than a
//! full transform.

use alloc::vec::Vec;

use crate::goertzel;

/// A probed grid point: frequency and its raw Goertzel magnitude.
///
/// Magnitudes carry no fixed unit and are comparable only within the pass
/// that produced them; the coarse scanner additionally normalizes by the
/// pass maximum before thresholding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeSample {
    /// Probed frequency in Hz.
    pub freq_hz: f32,
    /// Non-negative magnitude at that frequency.
    pub magnitude: f32,
}

/// Wide-range, low-resolution sweep for the approximate fundamental.
#[derive(Debug, Clone)]
pub struct CoarseScanner {
    min_hz: f32,
    step_hz: f32,
    sample_rate: f32,
    peak_threshold: f32,
    points: usize,
    /// Scratch for one pass of grid magnitudes; sized at construction.
    magnitudes: Vec<f32>,
}

impl CoarseScanner {
    /// Build a scanner probing `[min_hz, max_hz]` every `step_hz`.
    pub fn new(
        min_hz: f32,
        max_hz: f32,
        step_hz: f32,
        sample_rate: f32,
        peak_threshold: f32,
    ) -> Self {
        debug_assert!(min_hz < max_hz && step_hz > 0.0);
        let points = ((max_hz - min_hz) / step_hz) as usize + 1;
        Self {
            min_hz,
            step_hz,
            sample_rate,
            peak_threshold,
            points,
            magnitudes: Vec::with_capacity(points),
        }
    }

    /// Frequency of grid point `i`.
    #[inline]
    fn freq_at(&self, i: usize) -> f32 {
        self.min_hz + i as f32 * self.step_hz
    }

    /// Sweep the grid and return the approximate fundamental, if any.
    ///
    /// Magnitudes are normalized by the pass maximum; a point qualifies as a
    /// peak candidate only when its normalized magnitude exceeds the
    /// threshold and strictly exceeds both immediate neighbors (edge points
    /// never qualify). The strongest candidate wins; on an exact magnitude
    /// tie the earlier (lower-frequency) candidate is kept.
    ///
    /// Returns `None` on a flat or sub-threshold spectrum — the expected
    /// outcome for quiet or ambiguous frames.
    pub fn scan(&mut self, samples: &[f32]) -> Option<MagnitudeSample> {
        self.magnitudes.clear();
        for i in 0..self.points {
            let m = goertzel::magnitude(samples, self.freq_at(i), self.sample_rate);
            self.magnitudes.push(m);
        }

        let max = self
            .magnitudes
            .iter()
            .fold(0.0f32, |acc, &m| acc.max(m));
        if max <= 0.0 {
            return None;
        }

        let mut best: Option<MagnitudeSample> = None;
        for i in 1..self.magnitudes.len().saturating_sub(1) {
            let norm = self.magnitudes[i] / max;
            let is_peak = norm > self.peak_threshold
                && self.magnitudes[i] > self.magnitudes[i - 1]
                && self.magnitudes[i] > self.magnitudes[i + 1];
            if !is_peak {
                continue;
            }
            // Strict comparison keeps the first-found candidate on a tie.
            if best.is_none_or(|b| norm > b.magnitude) {
                best = Some(MagnitudeSample {
                    freq_hz: self.freq_at(i),
                    magnitude: norm,
                });
            }
        }
        best
    }
}

/// Narrow sweep around a coarse estimate at fine resolution.
#[derive(Debug, Clone, Copy)]
pub struct FineScanner {
    range_hz: f32,
    step_hz: f32,
    sample_rate: f32,
}

impl FineScanner {
    /// Build a scanner sweeping `±range_hz` around the coarse estimate
    /// every `step_hz`.
    pub fn new(range_hz: f32, step_hz: f32, sample_rate: f32) -> Self {
        debug_assert!(step_hz > 0.0 && range_hz >= step_hz);
        Self {
            range_hz,
            step_hz,
            sample_rate,
        }
    }

    /// Return the frequency with the highest raw magnitude in
    /// `[coarse_hz - range, coarse_hz + range]`.
    ///
    /// Total: the window always contains the coarse point itself, so there
    /// is always an answer. Raw magnitudes suffice here since only values
    /// from this one pass are compared.
    pub fn refine(&self, samples: &[f32], coarse_hz: f32) -> f32 {
        let points = (2.0 * self.range_hz / self.step_hz) as usize + 1;

        let mut best_freq = coarse_hz;
        let mut best_mag = f32::MIN;
        for i in 0..points {
            let freq = coarse_hz - self.range_hz + i as f32 * self.step_hz;
            let mag = goertzel::magnitude(samples, freq, self.sample_rate);
            if mag > best_mag {
                best_mag = mag;
                best_freq = freq;
            }
        }
        best_freq
    }
}
