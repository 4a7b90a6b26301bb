//! Simulate command - Batch self-play with outcome statistics

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::AgentKind,
    cli::commands::parse_player_token,
    simulation::{Simulation, SimulationConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Run a batch of self-play games and tally the outcomes")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    /// Agent playing the opening side
    #[arg(long, default_value_t = AgentKind::Minimax)]
    pub first: AgentKind,

    /// Agent playing the other side
    #[arg(long, default_value_t = AgentKind::Heuristic)]
    pub second: AgentKind,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Base random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let first_player = parse_player_token(&args.first_player, "--first-player")?;
    let seed = args.seed.unwrap_or_else(rand::random);

    println!("=== Simulation ===");
    println!("{} (as {first_player}) vs {}", args.first, args.second);
    println!("Games: {}", args.games);
    println!("Seed: {seed}");

    let config = SimulationConfig {
        games: args.games,
        first_agent: args.first,
        second_agent: args.second,
        first_player,
        seed,
    };

    let mut simulation = Simulation::new(config);
    if !args.no_progress {
        simulation = simulation.with_progress();
    }

    let report = simulation.run()?;

    println!("\n=== Results ===");
    println!("{report}");

    if let Some(path) = &args.export {
        report.save(path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}
