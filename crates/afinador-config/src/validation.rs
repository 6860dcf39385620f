//! Settings validation.
//!
//! Range checks applied before settings are turned into pipeline
//! parameters, so misconfiguration fails at startup with a concrete
//! message instead of producing nonsense detections later.

use thiserror::Error;

use crate::settings::Settings;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A field holds a non-positive value that must be positive.
    #[error("'{field}' must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The coarse scan range is empty or inverted.
    #[error("coarse scan range is empty: min {min_hz} Hz >= max {max_hz} Hz")]
    EmptyCoarseRange {
        /// Configured lower bound.
        min_hz: f32,
        /// Configured upper bound.
        max_hz: f32,
    },

    /// The fine step is larger than the fine window it sweeps.
    #[error("fine step {step_hz} Hz exceeds fine range {range_hz} Hz")]
    FineStepTooLarge {
        /// Configured fine step.
        step_hz: f32,
        /// Configured fine half-range.
        range_hz: f32,
    },

    /// Frame too short for windowing.
    #[error("frame length must be at least 2 samples, got {0}")]
    FrameTooShort(usize),

    /// Quorum cannot exceed the history it is counted over.
    #[error("debounce quorum {quorum} exceeds history length {history_len}")]
    QuorumExceedsHistory {
        /// Configured quorum.
        quorum: usize,
        /// Configured history length.
        history_len: usize,
    },

    /// The peak threshold must be a fraction of the pass maximum.
    #[error("peak threshold must be in (0, 1), got {0}")]
    PeakThresholdOutOfRange(f32),
}

/// Validate every range constraint on a settings struct.
///
/// Returns the first violation found; callers fix one problem at a time.
pub fn validate_settings(settings: &Settings) -> Result<(), ValidationError> {
    fn positive(field: &'static str, value: f32) -> Result<(), ValidationError> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::NotPositive {
                field,
                value: f64::from(value),
            })
        }
    }

    positive("sample_rate", settings.sample_rate)?;
    positive("coarse_step_hz", settings.coarse_step_hz)?;
    positive("fine_step_hz", settings.fine_step_hz)?;
    positive("rms_gate", settings.rms_gate)?;
    positive("cents_window", settings.cents_window)?;
    positive("deadband_cents", settings.deadband_cents)?;

    if settings.frame_len < 2 {
        return Err(ValidationError::FrameTooShort(settings.frame_len));
    }
    if settings.coarse_min_hz >= settings.coarse_max_hz {
        return Err(ValidationError::EmptyCoarseRange {
            min_hz: settings.coarse_min_hz,
            max_hz: settings.coarse_max_hz,
        });
    }
    if settings.fine_step_hz > settings.fine_range_hz {
        return Err(ValidationError::FineStepTooLarge {
            step_hz: settings.fine_step_hz,
            range_hz: settings.fine_range_hz,
        });
    }
    if settings.quorum == 0 || settings.history_len == 0 {
        return Err(ValidationError::NotPositive {
            field: if settings.quorum == 0 { "quorum" } else { "history_len" },
            value: 0.0,
        });
    }
    if settings.quorum > settings.history_len {
        return Err(ValidationError::QuorumExceedsHistory {
            quorum: settings.quorum,
            history_len: settings.history_len,
        });
    }
    if settings.peak_threshold <= 0.0 || settings.peak_threshold >= 1.0 {
        return Err(ValidationError::PeakThresholdOutOfRange(
            settings.peak_threshold,
        ));
    }

    Ok(())
}
