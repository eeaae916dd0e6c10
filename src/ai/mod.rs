//! Automated players: the minimax search engine, its heuristic evaluator,
//! and a random baseline.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{minimax, Heuristic, MinimaxAgent, SearchOutcome, WindowHeuristic};
pub use minimax::{DEFAULT_DEPTH, WIN_SCORE};
pub use random::RandomAgent;
