//! Game driver: alternates two agents until the board is terminal

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agent::Agent,
    board::{BoardState, Player},
};

/// Retry budget per turn before a misbehaving agent is reported as stuck.
/// Agents contractually return legal moves; the budget only guards
/// against a buggy implementation looping forever.
const MOVE_ATTEMPTS: usize = 9;

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A finished game: outcome, final position, and the move sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedGame {
    pub outcome: GameOutcome,
    pub board: BoardState,
    pub moves: Vec<usize>,
}

/// Runs a single game between two agents.
///
/// The first agent plays as `first_player`, the second as the opponent.
/// Illegal moves returned by an agent are discarded and the agent is
/// asked again; the move is never applied.
pub struct GameRunner {
    first_player: Player,
    display: bool,
}

impl GameRunner {
    /// Create a runner with X opening the game
    pub fn new() -> Self {
        Self {
            first_player: Player::X,
            display: false,
        }
    }

    /// Configure which player makes the first move
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Print the board before each turn and after the game
    pub fn with_display(mut self) -> Self {
        self.display = true;
        self
    }

    /// Play one game to completion
    pub fn run(
        &self,
        first_agent: &mut dyn Agent,
        second_agent: &mut dyn Agent,
    ) -> Result<CompletedGame> {
        let mut state = BoardState::new_with_player(self.first_player);
        let mut moves = Vec::new();

        while !state.is_terminal() {
            if self.display {
                println!("\n{state}");
            }

            let agent: &mut dyn Agent = if state.to_move == self.first_player {
                first_agent
            } else {
                second_agent
            };

            let pos = Self::request_move(agent, &state)?;
            moves.push(pos);
            state = state.make_move(pos)?;
        }

        if self.display {
            println!("\n{state}");
        }

        let outcome = match state.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        };

        Ok(CompletedGame {
            outcome,
            board: state,
            moves,
        })
    }

    /// Ask the agent for a move, discarding illegal answers and retrying
    fn request_move(agent: &mut dyn Agent, state: &BoardState) -> Result<usize> {
        for _ in 0..MOVE_ATTEMPTS {
            let pos = agent.select_move(state)?;
            if pos < 9 && state.is_empty(pos) {
                return Ok(pos);
            }
        }

        Err(crate::Error::AgentStalled {
            agent: agent.name().to_string(),
            attempts: MOVE_ATTEMPTS,
        })
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new()
    }
}
