//! noughts CLI - tic-tac-toe games between pluggable agents
//!
//! This CLI provides:
//! - Interactive play against any agent
//! - Large-batch self-play simulation with outcome statistics

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe engine with pluggable agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against an agent
    Play(noughts::cli::commands::play::PlayArgs),

    /// Run a batch of self-play games and tally the outcomes
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}
