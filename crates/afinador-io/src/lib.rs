//! Audio acquisition layer for the afinador tuner.
//!
//! The detection pipeline in `afinador-core` is fed fixed-length frames of
//! normalized samples; this crate is where those frames come from:
//!
//! - **WAV file input**: [`read_wav`] loads and mono-downmixes recordings so
//!   plucks can be analyzed offline; [`write_wav`] backs the test-tone
//!   generator.
//! - **Live capture**: [`InputStream`] delivers fixed-length microphone
//!   frames to a callback, with device listing and selection by name.
//!
//! The pipeline itself never fails; everything that can actually go wrong
//! (missing devices, unreadable files, stream setup) lives behind this
//! crate's [`Error`].

mod stream;
mod wav;

pub use stream::{
    AudioDevice, CaptureConfig, InputStream, StopHandle, default_input_device, list_input_devices,
};
pub use wav::{WavSpec, read_wav, write_wav};

/// Error types for audio acquisition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio input device available on the system.
    #[error("No audio input device available")]
    NoDevice,

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio acquisition operations.
pub type Result<T> = std::result::Result<T, Error>;
