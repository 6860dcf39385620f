//! Settings file format and conversion into pipeline parameters.

use serde::{Deserialize, Serialize};
use std::path::Path;

use afinador_core::TunerParams;

use crate::error::ConfigError;
use crate::validation::validate_settings;

/// Tuner settings as stored on disk.
///
/// Every field has a default matching the reference pipeline, so a settings
/// file only needs to name the values it overrides.
///
/// # TOML Format
///
/// ```toml
/// sample_rate = 44100.0
/// frame_len = 4096
/// coarse_min_hz = 50.0
/// coarse_max_hz = 350.0
/// coarse_step_hz = 5.0
/// rms_gate = 0.002
/// ```
///
/// Field names map 1:1 onto [`TunerParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sample rate of incoming frames in Hz.
    pub sample_rate: f32,
    /// Frame length in samples.
    pub frame_len: usize,
    /// Low end of the coarse scan grid in Hz.
    pub coarse_min_hz: f32,
    /// High end of the coarse scan grid in Hz.
    pub coarse_max_hz: f32,
    /// Coarse grid spacing in Hz.
    pub coarse_step_hz: f32,
    /// Fine scan half-range around the coarse estimate, in Hz.
    pub fine_range_hz: f32,
    /// Fine grid spacing in Hz.
    pub fine_step_hz: f32,
    /// Pre-emphasis coefficient α.
    pub pre_emphasis: f32,
    /// RMS silence gate threshold.
    pub rms_gate: f32,
    /// Normalized coarse-peak threshold, in (0, 1).
    pub peak_threshold: f32,
    /// Maximum absolute cents deviation the matcher accepts.
    pub cents_window: f32,
    /// Debounce history length.
    pub history_len: usize,
    /// Debounce consistency quorum.
    pub quorum: usize,
    /// In-tune dead zone half-width in cents.
    pub deadband_cents: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(&TunerParams::default())
    }
}

impl From<&TunerParams> for Settings {
    fn from(p: &TunerParams) -> Self {
        Self {
            sample_rate: p.sample_rate,
            frame_len: p.frame_len,
            coarse_min_hz: p.coarse_min_hz,
            coarse_max_hz: p.coarse_max_hz,
            coarse_step_hz: p.coarse_step_hz,
            fine_range_hz: p.fine_range_hz,
            fine_step_hz: p.fine_step_hz,
            pre_emphasis: p.pre_emphasis,
            rms_gate: p.rms_gate,
            peak_threshold: p.peak_threshold,
            cents_window: p.cents_window,
            history_len: p.history_len,
            quorum: p.quorum,
            deadband_cents: p.deadband_cents,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Validate and convert into pipeline parameters.
    pub fn into_params(self) -> Result<TunerParams, ConfigError> {
        validate_settings(&self)?;
        Ok(TunerParams {
            sample_rate: self.sample_rate,
            frame_len: self.frame_len,
            coarse_min_hz: self.coarse_min_hz,
            coarse_max_hz: self.coarse_max_hz,
            coarse_step_hz: self.coarse_step_hz,
            fine_range_hz: self.fine_range_hz,
            fine_step_hz: self.fine_step_hz,
            pre_emphasis: self.pre_emphasis,
            rms_gate: self.rms_gate,
            peak_threshold: self.peak_threshold,
            cents_window: self.cents_window,
            history_len: self.history_len,
            quorum: self.quorum,
            deadband_cents: self.deadband_cents,
        })
    }
}
