use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    digest::{self, DigestArgs},
    validate::{self, ValidateArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser, Debug)]
#[command(name = "marquee", about = "Movie table normalization and ranking CLI")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a movie table and write every derived view.
    Analyze(AnalyzeArgs),
    /// Check that a movie table carries every required column.
    Validate(ValidateArgs),
    /// Print the canonical digest of the analysis report.
    Digest(DigestArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Analyze(args) => analyze::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Digest(args) => digest::run(&args),
    }
}
