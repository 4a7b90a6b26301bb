//! Random baseline agent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{Result, agent::Agent, board::BoardState};

/// Uniformly random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &BoardState) -> Result<usize> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_returns_legal_move() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 42);
        let board = BoardState::new();
        let pos = agent
            .select_move(&board)
            .expect("random agent should supply a move");
        assert!(pos < 9);
    }

    #[test]
    fn test_random_agent_only_plays_empty_cells() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 7);
        let board = BoardState::from_string("XOXO.X.O.").unwrap();

        for _ in 0..50 {
            let pos = agent.select_move(&board).unwrap();
            assert!(board.is_empty(pos), "agent played occupied cell {pos}");
        }
    }

    #[test]
    fn test_random_agent_deterministic_with_seed() {
        let board = BoardState::new();

        let mut a = RandomAgent::with_seed("A".to_string(), 123);
        let mut b = RandomAgent::with_seed("B".to_string(), 123);

        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board).unwrap(),
                b.select_move(&board).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_errors_without_moves() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 1);
        let board = BoardState::from_string("XOXOXOOXO").unwrap();
        assert!(matches!(
            agent.select_move(&board),
            Err(crate::Error::NoValidMoves)
        ));
    }
}
