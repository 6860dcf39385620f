//! Afinador Core - guitar pitch detection pipeline
//!
//! This crate estimates the fundamental frequency of a plucked string and
//! maps it to the nearest standard-tuning pitch, producing a stable tuning
//! directive (note identity plus signed cents deviation).
//!
//! # Pipeline
//!
//! Each stage feeds the next; data never flows backward:
//!
//! - [`Preprocessor`] - Hann window, pre-emphasis, RMS silence gate
//! - [`goertzel`] - single-bin magnitude estimation
//! - [`CoarseScanner`] - wide grid sweep for the approximate fundamental
//! - [`FineScanner`] - narrow sweep refining the coarse estimate
//! - [`notes::match_note`] - nearest reference pitch within a cents window
//! - [`Debouncer`] - quorum over a short history before anything is emitted
//!
//! [`TunerEngine`] owns all of the above and runs one frame at a time:
//!
//! ```rust
//! use afinador_core::{TunerEngine, TunerParams};
//!
//! let params = TunerParams::default();
//! let mut engine = TunerEngine::new(params);
//!
//! let frame = vec![0.0f32; engine.frame_len()];
//! // A silent frame produces no directive; that's the steady state.
//! assert!(engine.process_frame(&frame).is_none());
//! ```
//!
//! # Control flow, not errors
//!
//! Silence, an ambiguous spectrum, an out-of-range frequency, and an
//! unstable detection all short-circuit a pass with `None`. None of them
//! are failures, so this crate defines no error type.
//!
//! # no_std Support
//!
//! `no_std` compatible for embedded tuner builds (buffers use `alloc`).
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! afinador-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod debounce;
pub mod engine;
pub mod goertzel;
pub mod notes;
pub mod params;
pub mod preprocess;
pub mod scan;

pub use debounce::{Debouncer, Guidance, TuningDirective};
pub use engine::{FrameAssessment, TunerEngine};
pub use notes::{GuitarNote, NoteMatch, STANDARD_TUNING, cents_between, match_note};
pub use params::TunerParams;
pub use preprocess::{Conditioned, Preprocessor};
pub use scan::{CoarseScanner, FineScanner, MagnitudeSample};
