use crate::game::GameState;

/// Universal interface for automated players.
///
/// Callers guarantee the state is non-terminal with at least one legal
/// column before asking for a move.
pub trait Agent {
    /// Select a column to play in the current game state.
    fn select_column(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
