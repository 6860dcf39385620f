//! Settings loading and validation for the afinador tuner.
//!
//! This crate turns a TOML settings file into validated
//! [`TunerParams`](afinador_core::TunerParams) for the detection pipeline.
//! Every threshold the pipeline recognizes can be overridden from the file;
//! anything left out keeps the reference default.
//!
//! # Example
//!
//! ```rust
//! use afinador_config::Settings;
//!
//! let settings = Settings::from_toml("rms_gate = 0.005\n").unwrap();
//! let params = settings.into_params().unwrap();
//! assert_eq!(params.rms_gate, 0.005);
//! ```

mod error;
mod settings;

/// Platform-specific paths for the settings file.
pub mod paths;

/// Settings validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{default_settings_path, user_config_dir};
pub use settings::Settings;
pub use validation::{ValidationError, validate_settings};
