//! Play command - Interactive game against an agent

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::{AgentKind, HumanAgent},
    cli::commands::parse_player_token,
    runner::{GameOutcome, GameRunner},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against an agent")]
pub struct PlayArgs {
    /// Opponent agent
    #[arg(long, short = 'o', default_value_t = AgentKind::Minimax)]
    pub opponent: AgentKind,

    /// Which token the human controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub player: String,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Random seed for the opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human_player = parse_player_token(&args.player, "--player")?;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut human = HumanAgent::new("you".to_string());
    let mut opponent = args.opponent.build(args.opponent.as_str(), seed);

    println!("You play {human_player} against {} ({first_player} opens).", opponent.name());
    println!("Cells are numbered 1-9, left to right, top to bottom.");

    let runner = GameRunner::new()
        .with_first_player(first_player)
        .with_display();

    let game = if human_player == first_player {
        runner.run(&mut human, opponent.as_mut())?
    } else {
        runner.run(opponent.as_mut(), &mut human)?
    };

    match game.outcome {
        GameOutcome::Win(winner) if winner == human_player => println!("You win!"),
        GameOutcome::Win(winner) => println!("Player {winner} wins!"),
        GameOutcome::Draw => println!("Cat's game."),
    }

    Ok(())
}
