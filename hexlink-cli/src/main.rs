//! HEXLINK CLI - Command-line interface
//!
//! Commands:
//! - simulate: play random games to completion and report results
//! - probe: map a pointer coordinate to a board cell

use clap::{Parser, Subcommand};

mod probe;
mod simulate;

#[derive(Parser)]
#[command(name = "hexlink")]
#[command(about = "Hex connection game rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play random self-play games and report who connects first
    Simulate(simulate::SimulateArgs),
    /// Map a window coordinate to the board cell under it
    Probe(probe::ProbeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate::run(args),
        Commands::Probe(args) => probe::run(args),
    }
}
