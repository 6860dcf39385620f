//! Tuner pipeline parameters.
//!
//! Every threshold and range used by the pipeline lives here as a plain
//! field so hosts can tune them at startup. [`TunerParams::default`] gives
//! the reference values the detection thresholds were validated against.

/// Parameters for the full detection pipeline.
///
/// # Invariants
///
/// - `frame_len >= 2` (the Hann window divides by `frame_len - 1`)
/// - `coarse_min_hz < coarse_max_hz`, `coarse_step_hz > 0`
/// - `fine_step_hz > 0`, `fine_range_hz >= fine_step_hz`
/// - `quorum <= history_len`
///
/// Construction from TOML settings enforces these; hosts building the
/// struct directly are expected to uphold them.
#[derive(Debug, Clone)]
pub struct TunerParams {
    /// Sample rate of incoming frames in Hz.
    pub sample_rate: f32,
    /// Frame length in samples. Fixed for the lifetime of the engine.
    pub frame_len: usize,
    /// Low end of the coarse scan grid in Hz.
    pub coarse_min_hz: f32,
    /// High end of the coarse scan grid in Hz.
    pub coarse_max_hz: f32,
    /// Coarse scan grid spacing in Hz.
    pub coarse_step_hz: f32,
    /// Half-width of the fine scan window around the coarse estimate, in Hz.
    pub fine_range_hz: f32,
    /// Fine scan grid spacing in Hz.
    pub fine_step_hz: f32,
    /// Pre-emphasis coefficient α in `y[i] = x[i] - α·x[i-1]`.
    pub pre_emphasis: f32,
    /// RMS level below which a frame is treated as silence.
    pub rms_gate: f32,
    /// Normalized magnitude a coarse grid point must exceed to be a peak
    /// candidate.
    pub peak_threshold: f32,
    /// Maximum absolute cents deviation for a frequency to match a string.
    pub cents_window: f32,
    /// Number of past match results the debouncer remembers.
    pub history_len: usize,
    /// How many entries in the history must agree with the current match
    /// before a directive is emitted.
    pub quorum: usize,
    /// Half-width of the in-tune dead zone in cents.
    pub deadband_cents: f32,
}

impl Default for TunerParams {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            frame_len: 4096,
            coarse_min_hz: 50.0,
            coarse_max_hz: 350.0,
            coarse_step_hz: 5.0,
            fine_range_hz: 10.0,
            fine_step_hz: 1.0,
            pre_emphasis: 0.85,
            rms_gate: 0.002,
            peak_threshold: 0.5,
            cents_window: 100.0,
            history_len: 4,
            quorum: 3,
            deadband_cents: 10.0,
        }
    }
}
