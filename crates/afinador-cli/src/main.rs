//! Afinador CLI - command-line guitar tuner.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "afinador")]
#[command(author, version, about = "Guitar tuner CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tune live from a microphone
    Listen(commands::listen::ListenArgs),

    /// Run a recorded WAV file through the pipeline
    Analyze(commands::analyze::AnalyzeArgs),

    /// List available capture devices
    Devices(commands::devices::DevicesArgs),

    /// Generate a test tone WAV file
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Listen(args) => commands::listen::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Devices(args) => commands::devices::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
