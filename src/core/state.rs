//! Game state: everything a rules engine needs to continue a game.
//!
//! ## GameState
//!
//! - Side to move
//! - Board contents
//! - Current legal-move set
//! - Game-over flag and losing side
//! - The capturing piece's square while a capture chain is in progress
//!
//! State is plain data. A `RulesEngine` threads it through every operation;
//! nothing else mutates it.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use super::moves::Move;
use super::side::Side;
use super::square::Square;
use crate::error::SnapshotError;

/// Complete state of a checkers game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Side to move.
    pub side: Side,

    /// Board contents.
    pub board: Board,

    /// Legal moves for `side`, in generation order.
    ///
    /// Contains only captures whenever any capture is available.
    pub legal_moves: Vec<Move>,

    /// Set once `side` has no legal moves.
    pub game_over: bool,

    /// The side that ran out of moves.
    pub losing_side: Option<Side>,

    /// Square of the piece that must keep jumping, mid capture chain.
    pub chain: Option<Square>,
}

impl GameState {
    /// Create a state with no legal moves computed yet.
    ///
    /// Use `RulesEngine::initial_state` to get a playable state.
    #[must_use]
    pub fn new(board: Board, side: Side) -> Self {
        Self {
            side,
            board,
            legal_moves: Vec::new(),
            game_over: false,
            losing_side: None,
            chain: None,
        }
    }

    // === Probing (bound to the side to move) ===

    #[must_use]
    pub fn is_on_board(&self, r: i32, c: i32) -> bool {
        self.board.is_on_board(r, c)
    }

    #[must_use]
    pub fn is_empty(&self, r: i32, c: i32) -> bool {
        self.board.is_empty(r, c)
    }

    /// Whether the cell holds a piece of the side not to move.
    #[must_use]
    pub fn is_opponent(&self, r: i32, c: i32) -> bool {
        self.board.is_opponent(r, c, self.side)
    }

    /// Whether the cell holds a piece of the side to move.
    #[must_use]
    pub fn is_own(&self, r: i32, c: i32) -> bool {
        self.board.is_own(r, c, self.side)
    }

    // === Queries ===

    /// Whether `mv` is in the current legal-move set.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    /// The legal move from `from` to `to`, if any.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves.iter().copied().find(|m| m.connects(from, to))
    }

    /// Whether the side to move is in the middle of a capture chain.
    #[must_use]
    pub fn in_capture_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// Flat row-major view of the board, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.board.snapshot()
    }

    // === Snapshots ===

    /// Encode the full state with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(r: u8, c: u8) -> Square {
        Square::new(r, c).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Board::standard(), Side::Light);

        assert_eq!(state.side, Side::Light);
        assert!(state.legal_moves.is_empty());
        assert!(!state.game_over);
        assert_eq!(state.losing_side, None);
        assert!(!state.in_capture_chain());
    }

    #[test]
    fn test_bound_probes_follow_side() {
        let mut state = GameState::new(Board::standard(), Side::Light);
        assert!(state.is_own(5, 1));
        assert!(state.is_opponent(2, 2));

        state.side = Side::Dark;
        assert!(!state.is_own(5, 1));
        assert!(state.is_opponent(5, 1));
        assert!(!state.is_opponent(-1, -1));
    }

    #[test]
    fn test_find_move() {
        let mut state = GameState::new(Board::standard(), Side::Light);
        let mv = Move::step(sq(5, 1), sq(4, 0));
        state.legal_moves.push(mv);

        assert!(state.is_legal(&mv));
        assert_eq!(state.find_move(sq(5, 1), sq(4, 0)), Some(mv));
        assert_eq!(state.find_move(sq(5, 1), sq(4, 2)), None);
    }

    #[test]
    fn test_encode_decode() {
        let mut state = GameState::new(Board::standard(), Side::Dark);
        state.legal_moves.push(Move::step(sq(2, 2), sq(3, 3)));
        state.chain = Some(sq(2, 2));

        let bytes = state.encode().unwrap();
        let decoded = GameState::decode(&bytes).unwrap();

        assert_eq!(state, decoded);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(GameState::decode(&[0xff, 0xff]).is_err());
    }
}
