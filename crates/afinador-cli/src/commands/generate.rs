//! Test tone generation command.
//!
//! Writes a pure sine WAV, handy for exercising `analyze` without a
//! guitar at hand: `afinador generate tone.wav --note A2 --cents -20`.

use clap::Args;
use std::f32::consts::TAU;
use std::path::PathBuf;

use afinador_core::STANDARD_TUNING;
use afinador_io::write_wav;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Frequency in Hz (overrides --note)
    #[arg(long)]
    freq: Option<f32>,

    /// Note name from standard tuning (E2, A2, D3, G3, B3, E4)
    #[arg(long, default_value = "A2")]
    note: String,

    /// Detune the generated tone by this many cents
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    cents: f32,

    /// Duration in seconds
    #[arg(long, default_value = "2.0")]
    duration: f32,

    /// Sample rate
    #[arg(long, default_value = "44100")]
    sample_rate: u32,

    /// Amplitude (0-1)
    #[arg(long, default_value = "0.5")]
    amplitude: f32,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let base = match args.freq {
        Some(freq) => freq,
        None => {
            STANDARD_TUNING
                .iter()
                .find(|n| n.name.eq_ignore_ascii_case(&args.note))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown note '{}' (expected one of E2, A2, D3, G3, B3, E4)",
                        args.note
                    )
                })?
                .frequency
        }
    };
    let freq = base * 2.0f32.powf(args.cents / 1200.0);

    let len = (args.duration * args.sample_rate as f32) as usize;
    let samples: Vec<f32> = (0..len)
        .map(|i| args.amplitude * (TAU * freq * i as f32 / args.sample_rate as f32).sin())
        .collect();

    write_wav(&args.output, &samples, args.sample_rate)?;
    println!(
        "Wrote {:.2} s at {:.2} Hz ({} {:+.1} cents) to {}",
        args.duration,
        freq,
        if args.freq.is_some() { "custom" } else { args.note.as_str() },
        args.cents,
        args.output.display()
    );

    Ok(())
}
