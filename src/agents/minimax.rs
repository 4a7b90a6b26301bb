//! Exhaustive game-tree search agent (minimax)

use std::collections::HashMap;

use crate::{
    Result,
    agent::Agent,
    board::{BoardState, Player},
};

/// Perfect-play policy via full game-tree search.
///
/// Positions are scored in {-1, 0, +1}: +1 when X wins, -1 when O wins, 0
/// for a draw. X maximizes and O minimizes, so the selected move is
/// optimal for whichever side is to move. Values are memoized on the
/// board encoding; the full 9-cell tree is small enough that no pruning
/// is needed, and memoization never changes which move is selected.
///
/// Ties are broken by the first-encountered cell in ascending index
/// order.
pub struct MinimaxAgent {
    name: String,
    cache: HashMap<String, i32>,
}

impl MinimaxAgent {
    /// Create a new minimax agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            cache: HashMap::new(),
        }
    }

    fn minimax(&mut self, state: &BoardState) -> i32 {
        let key = state.encode();
        if let Some(&value) = self.cache.get(&key) {
            return value;
        }

        if state.is_terminal() {
            let value = match state.winner() {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            self.cache.insert(key, value);
            return value;
        }

        let maximizing = state.to_move == Player::X;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in state.empty_positions() {
            if let Ok(next_state) = state.make_move(pos) {
                let value = self.minimax(&next_state);
                best = if maximizing {
                    best.max(value)
                } else {
                    best.min(value)
                };
            }
        }

        self.cache.insert(key, best);
        best
    }

    /// Evaluate every legal move in the given state and return its value
    /// from X's perspective, in ascending position order.
    pub fn evaluate_moves(&mut self, state: &BoardState) -> Vec<(usize, i32)> {
        let mut moves_with_values = Vec::new();
        for pos in state.empty_positions() {
            if let Ok(next_state) = state.make_move(pos) {
                let value = self.minimax(&next_state);
                moves_with_values.push((pos, value));
            }
        }
        moves_with_values
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        let maximizing = state.to_move == Player::X;
        let moves_with_values = self.evaluate_moves(state);
        if moves_with_values.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }

        // Strict comparisons keep the first of the maximal moves
        let mut best_move = None;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

        for (mv, value) in moves_with_values {
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_move = Some(mv);
            }
        }

        best_move.ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
