//! Agent implementations
//!
//! Decision policies behind the [`crate::agent::Agent`] trait:
//! - [`MinimaxAgent`]: exhaustive search, perfect play
//! - [`HeuristicAgent`]: win-now / block-now / random fallback
//! - [`RandomAgent`]: uniform random baseline
//! - [`HumanAgent`]: console input

pub mod heuristic;
pub mod human;
pub mod minimax;
pub mod random;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use heuristic::HeuristicAgent;
pub use human::HumanAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::agent::Agent;

/// Buildable (non-interactive) agent kinds, used by the CLI and by batch
/// simulation to construct fresh agents per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Heuristic,
    Minimax,
}

impl AgentKind {
    /// Build an agent of this kind with a deterministic seed
    pub fn build(self, name: &str, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::with_seed(name.to_string(), seed)),
            AgentKind::Heuristic => Box::new(HeuristicAgent::with_seed(name.to_string(), seed)),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(name.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Heuristic => "heuristic",
            AgentKind::Minimax => "minimax",
        }
    }
}

impl FromStr for AgentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "heuristic" => Ok(AgentKind::Heuristic),
            "minimax" => Ok(AgentKind::Minimax),
            other => Err(crate::Error::ParseAgentKind {
                input: other.to_string(),
                expected: "random, heuristic, minimax".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
