//! CLI command implementations.

pub mod analyze;
pub mod devices;
pub mod generate;
pub mod listen;

use std::path::PathBuf;

use afinador_config::Settings;
use afinador_core::TunerParams;

/// Load pipeline parameters from `--settings`, the default settings file,
/// or the built-in defaults, in that order.
pub fn load_params(settings: Option<&PathBuf>) -> anyhow::Result<TunerParams> {
    let settings = match settings {
        Some(path) => Settings::load(path)?,
        None => {
            let default_path = afinador_config::default_settings_path();
            if default_path.exists() {
                tracing::debug!(path = %default_path.display(), "using settings file");
                Settings::load(&default_path)?
            } else {
                Settings::default()
            }
        }
    };
    Ok(settings.into_params()?)
}
