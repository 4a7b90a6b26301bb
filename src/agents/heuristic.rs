//! Heuristic agent: one-ply pattern lookahead
//!
//! Cheap tactical play without search: take an immediate win, otherwise
//! block the opponent's immediate win, otherwise play randomly. This
//! captures most of tic-tac-toe's tactical structure but is not optimal
//! (it misses forks), which makes it a useful contrast to the minimax
//! agent.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{Result, agent::Agent, board::BoardState, lines::LineAnalyzer};

/// Pattern-based policy: win-now, block-now, random fallback.
///
/// Line scans follow the fixed [`crate::lines::WINNING_LINES`] order, so
/// the first qualifying line decides the move.
pub struct HeuristicAgent {
    name: String,
    rng: StdRng,
}

impl HeuristicAgent {
    /// Create a new heuristic agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a heuristic agent with a deterministic seed for the fallback
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Find a move that wins immediately for the side to move
    fn winning_move(board: &BoardState) -> Option<usize> {
        LineAnalyzer::first_winning_move(&board.cells, board.to_move)
    }

    /// Find a move that blocks the opponent's immediate win
    fn blocking_move(board: &BoardState) -> Option<usize> {
        LineAnalyzer::first_winning_move(&board.cells, board.to_move.opponent())
    }
}

impl Agent for HeuristicAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<usize> {
        if let Some(pos) = Self::winning_move(board) {
            return Ok(pos);
        }

        if let Some(pos) = Self::blocking_move(board) {
            return Ok(pos);
        }

        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
