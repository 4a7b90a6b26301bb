//! Agent port - abstraction for move-selection policies
//!
//! All decision-making agents implement this trait, allowing the game
//! runner and batch simulation to work with any mix of policies:
//! - Exhaustive search (minimax)
//! - Pattern heuristics (win-now / block-now)
//! - Random baselines
//! - Human console input

use crate::{Result, board::BoardState};

/// Unified interface for move-selection policies.
///
/// An agent's token identity is whatever `board.to_move` says when it is
/// asked for a move; the runner only consults an agent on its own turn.
pub trait Agent: Send {
    /// Select a move for the given board state.
    ///
    /// The agent must return the index (0-8) of an empty cell. The caller
    /// guarantees the board is non-terminal; a terminal board is a
    /// contract violation answered with [`crate::Error::NoValidMoves`].
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move exists, or if a human agent's
    /// input stream is closed.
    fn select_move(&mut self, board: &BoardState) -> Result<usize>;

    /// Get the agent's name, used in reports and error messages.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Simulations call this when supplied with a deterministic seed to
    /// ensure reproducible results. Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
