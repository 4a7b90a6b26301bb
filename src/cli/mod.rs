//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for interactive play
//! and batch self-play simulation.

pub mod commands;
