//! Rules engine trait.
//!
//! A rules engine defines:
//! - The starting state for a configuration
//! - What moves are legal
//! - How a move changes the state
//! - When the game is over
//!
//! Engines are stateless: the `GameState` is threaded through every call.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameState, Move, Side, Square};
use crate::error::MoveError;

/// Result of a finished game.
///
/// Checkers games here end only when a side cannot move, so there is always
/// exactly one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Side,
    pub loser: Side,
}

impl GameResult {
    /// Result of a game lost by `loser`.
    #[must_use]
    pub const fn lost_by(loser: Side) -> Self {
        Self {
            winner: loser.opponent(),
            loser,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// What applying a move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub applied: Move,

    /// Square of the piece removed, for captures.
    pub captured: Option<Square>,

    /// The moving man was crowned on landing.
    pub promoted: bool,

    /// The same piece must jump again; the side to move is unchanged.
    pub continues_chain: bool,

    /// Side to move after the move.
    pub next_side: Side,

    /// The side to move has no legal moves left.
    pub game_over: bool,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Recompute from the board; `state.legal_moves` caches it
/// - `apply_move`: Must reject moves outside `state.legal_moves` without
///   touching the state
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Build the starting state for a configuration, legal moves included.
    fn initial_state(&self, config: &EngineConfig) -> GameState;

    /// Compute the legal-move set for the side to move.
    ///
    /// Returns empty if the side to move cannot move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Apply a move from `state.legal_moves`.
    ///
    /// Must be deterministic.
    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.game_over {
            state.losing_side.map(GameResult::lost_by)
        } else {
            None
        }
    }

    // === Convenience Methods ===

    /// Destinations of legal moves starting at `from`.
    fn destinations(&self, state: &GameState, from: Square) -> Vec<Square> {
        state
            .legal_moves
            .iter()
            .filter(|m| m.from == from)
            .map(|m| m.to)
            .collect()
    }

    /// Match a proposed (source, destination) pair and apply it.
    fn apply_proposed(
        &self,
        state: &mut GameState,
        from: Square,
        to: Square,
    ) -> Result<MoveOutcome, MoveError> {
        if state.game_over {
            return Err(MoveError::GameOver);
        }
        let mv = state
            .find_move(from, to)
            .ok_or(MoveError::NoSuchMove { from, to })?;
        self.apply_move(state, &mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::lost_by(Side::Dark);

        assert_eq!(result.winner, Side::Light);
        assert!(result.is_winner(Side::Light));
        assert!(!result.is_winner(Side::Dark));
    }
}
