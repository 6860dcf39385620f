//! Offline analysis of a recorded WAV file.

use clap::Args;
use std::path::PathBuf;

use afinador_core::{FrameAssessment, TunerEngine};
use afinador_io::read_wav;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Settings file (TOML); falls back to the user config, then defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Show the per-frame assessment instead of debounced directives
    #[arg(long)]
    per_frame: bool,

    /// Emit line-delimited JSON instead of text (directive mode only)
    #[arg(long)]
    json: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut params = super::load_params(args.settings.as_ref())?;

    let (samples, spec) = read_wav(&args.input)?;
    if spec.sample_rate as f32 != params.sample_rate {
        tracing::info!(
            configured = params.sample_rate,
            file = spec.sample_rate,
            "overriding sample rate to match input file"
        );
        params.sample_rate = spec.sample_rate as f32;
    }

    let frame_len = params.frame_len;
    let mut engine = TunerEngine::new(params);

    let mut frames = 0usize;
    let mut directives = 0usize;
    for frame in samples.chunks_exact(frame_len) {
        frames += 1;
        if args.per_frame {
            match engine.assess(frame) {
                FrameAssessment::Silent => println!("frame {frames:>4}: silent"),
                FrameAssessment::NoPitch => println!("frame {frames:>4}: no pitch"),
                FrameAssessment::Unmatched { frequency_hz } => {
                    println!("frame {frames:>4}: {frequency_hz:.1} Hz (no string in range)");
                }
                FrameAssessment::Matched(m) => {
                    println!(
                        "frame {frames:>4}: {} {:+.1} cents ({:.1} Hz)",
                        m.note().name,
                        m.cents,
                        m.frequency_hz
                    );
                }
            }
        } else if let Some(directive) = engine.process_frame(frame) {
            directives += 1;
            if args.json {
                println!("{}", output::render_json(&directive));
            } else {
                println!("{}", output::render_text(&directive));
            }
        }
    }

    if !args.per_frame && !args.json {
        println!("\n{frames} frame(s) analyzed, {directives} directive(s) emitted");
    }

    Ok(())
}
