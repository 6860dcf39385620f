//! The full detection pipeline wired together.
//!
//! One [`TunerEngine`] owns every stage and all mutable state. Data flows
//! strictly forward through the stages; each pass over a frame either
//! produces a [`TuningDirective`] or short-circuits at the first stage that
//! cannot continue. Short circuits are ordinary control flow — silence
//! between plucks is the steady state, not a failure.

use crate::debounce::{Debouncer, TuningDirective};
use crate::notes::{self, NoteMatch};
use crate::params::TunerParams;
use crate::preprocess::Preprocessor;
use crate::scan::{CoarseScanner, FineScanner};

/// Where a single pipeline pass ended up, before debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameAssessment {
    /// Frame RMS below the gate; nothing downstream ran.
    Silent,
    /// No qualifying peak in the coarse scan; no pitch to report.
    NoPitch,
    /// A fine frequency was measured but no string lies within the cents
    /// window. Still recorded in the debounce history.
    Unmatched {
        /// The fine-scan frequency that failed to match, in Hz.
        frequency_hz: f32,
    },
    /// Measured frequency matched a string.
    Matched(NoteMatch),
}

/// Single-threaded pitch detection engine for one instrument.
///
/// Processes one frame at a time; the caller drives the cadence. All
/// buffers are allocated at construction, so `process_frame` is
/// allocation-free.
#[derive(Debug, Clone)]
pub struct TunerEngine {
    params: TunerParams,
    preprocessor: Preprocessor,
    coarse: CoarseScanner,
    fine: FineScanner,
    debouncer: Debouncer,
}

impl TunerEngine {
    /// Build an engine from pipeline parameters.
    pub fn new(params: TunerParams) -> Self {
        let preprocessor =
            Preprocessor::new(params.frame_len, params.pre_emphasis, params.rms_gate);
        let coarse = CoarseScanner::new(
            params.coarse_min_hz,
            params.coarse_max_hz,
            params.coarse_step_hz,
            params.sample_rate,
            params.peak_threshold,
        );
        let fine = FineScanner::new(params.fine_range_hz, params.fine_step_hz, params.sample_rate);
        let debouncer = Debouncer::new(params.history_len, params.quorum, params.deadband_cents);

        Self {
            params,
            preprocessor,
            coarse,
            fine,
            debouncer,
        }
    }

    /// The parameters this engine was built with.
    pub fn params(&self) -> &TunerParams {
        &self.params
    }

    /// Expected frame length in samples.
    pub fn frame_len(&self) -> usize {
        self.params.frame_len
    }

    /// Run stages 1-5 on one frame, without touching the debounce history.
    ///
    /// Used by offline analysis tooling and tests that want per-frame
    /// results; live tuning goes through [`process_frame`].
    ///
    /// [`process_frame`]: TunerEngine::process_frame
    pub fn assess(&mut self, frame: &[f32]) -> FrameAssessment {
        let Some(conditioned) = self.preprocessor.condition(frame) else {
            return FrameAssessment::Silent;
        };

        let Some(peak) = self.coarse.scan(conditioned.samples) else {
            return FrameAssessment::NoPitch;
        };

        let frequency_hz = self.fine.refine(conditioned.samples, peak.freq_hz);
        match notes::match_note(frequency_hz, self.params.cents_window) {
            Some(m) => FrameAssessment::Matched(m),
            None => FrameAssessment::Unmatched { frequency_hz },
        }
    }

    /// Run the full pipeline on one frame.
    ///
    /// Returns a directive only when the match passed the debounce quorum.
    /// Silent frames and frames with no coarse peak never reach the
    /// debouncer; frames whose fine frequency matched no string are
    /// recorded as rejects and dilute the history.
    pub fn process_frame(&mut self, frame: &[f32]) -> Option<TuningDirective> {
        match self.assess(frame) {
            FrameAssessment::Silent | FrameAssessment::NoPitch => None,
            FrameAssessment::Unmatched { .. } => {
                self.debouncer.observe(None);
                None
            }
            FrameAssessment::Matched(m) => self.debouncer.observe(Some(&m)),
        }
    }

    /// Forget the debounce history, e.g. after an input device error left a
    /// gap in the frame cadence.
    pub fn reset(&mut self) {
        self.debouncer.reset();
    }
}
