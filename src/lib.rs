//! Tic-tac-toe engine with pluggable agents
//!
//! This crate provides:
//! - Immutable 3x3 board state with win/draw detection
//! - A polymorphic [`agent::Agent`] interface for move-selection policies
//! - Exhaustive game-tree search (minimax), pattern heuristics, random
//!   and human agents
//! - A game runner alternating two agents, and parallel batch self-play
//!   simulation with per-token win tallies

pub mod agent;
pub mod agents;
pub mod board;
pub mod cli;
pub mod error;
pub mod lines;
pub mod runner;
pub mod simulation;

pub use agent::Agent;
pub use agents::{AgentKind, HeuristicAgent, HumanAgent, MinimaxAgent, RandomAgent};
pub use board::{BoardState, Cell, Player};
pub use error::{Error, Result};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use runner::{CompletedGame, GameOutcome, GameRunner};
pub use simulation::{Simulation, SimulationConfig, SimulationReport};
