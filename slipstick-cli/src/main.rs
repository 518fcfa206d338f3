//! Slipstick CLI - Command-line interface
//!
//! A thin host around the slipstick library: it owns an instrument
//! provider, feeds cursor positions to the update scheduler, and prints the
//! published readings.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{read, scales, sweep};

#[derive(Debug, Parser)]
#[command(name = "slipstick", version, about = "Virtual slide rule readings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the scales of an instrument layout
    Scales(scales::ScalesArgs),

    /// Read every visible scale at one cursor position
    Read(read::ReadArgs),

    /// Simulate a drag and show the publish gating at work
    Sweep(sweep::SweepArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed CLI arguments");

    let result = match cli.command {
        Commands::Scales(args) => scales::run(args),
        Commands::Read(args) => read::run(args),
        Commands::Sweep(args) => sweep::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
