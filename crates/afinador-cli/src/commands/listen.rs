//! Live tuning from a microphone.

use clap::Args;
use std::path::PathBuf;

use afinador_core::TunerEngine;
use afinador_io::{CaptureConfig, InputStream};

use crate::output;

#[derive(Args)]
pub struct ListenArgs {
    /// Settings file (TOML); falls back to the user config, then defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Input device name (substring match allowed)
    #[arg(long)]
    device: Option<String>,

    /// Emit line-delimited JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: ListenArgs) -> anyhow::Result<()> {
    let mut params = super::load_params(args.settings.as_ref())?;

    let mut stream = InputStream::new(CaptureConfig {
        frame_len: params.frame_len,
        device: args.device,
    })?;

    // The device dictates the true capture rate; the pipeline must agree
    // with it or every detected frequency would be scaled.
    let device_rate = stream.sample_rate() as f32;
    if (device_rate - params.sample_rate).abs() > f32::EPSILON {
        tracing::info!(
            configured = params.sample_rate,
            device = device_rate,
            "overriding sample rate to match capture device"
        );
        params.sample_rate = device_rate;
    }

    let mut engine = TunerEngine::new(params);

    if !args.json {
        println!("Listening... pluck a string. Press Ctrl+C to stop.\n");
    }

    let stop = stream.stop_handle();
    ctrlc::set_handler(move || stop.stop())?;

    let json = args.json;
    stream.run(move |frame| {
        if let Some(directive) = engine.process_frame(frame) {
            if json {
                println!("{}", output::render_json(&directive));
            } else {
                println!("{}", output::render_text(&directive));
            }
        }
    })?;

    Ok(())
}
