//! Error types.
//!
//! Board probing never fails (off-board coordinates just answer `false`), so
//! the only errors are rejected moves, malformed layout maps, off-board
//! coordinates in serialized data and failed snapshot decoding. A rejected move leaves the game state untouched.

use thiserror::Error;

use crate::core::moves::Move;
use crate::core::square::Square;

/// Why a move was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game has ended; reset before playing on.
    #[error("game is over")]
    GameOver,

    /// The move is not in the current legal-move set.
    #[error("move {0} is not legal in this position")]
    NotLegal(Move),

    /// No legal move goes from `from` to `to`.
    #[error("no legal move from {from} to {to}")]
    NoSuchMove { from: Square, to: Square },
}

/// Coordinates that do not name a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("square {row},{col} is off the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

/// Malformed text layout map.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has {0} rows, expected 8")]
    RowCount(usize),

    #[error("layout row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown cell code {code:?} at {row},{col}")]
    UnknownCode { row: usize, col: usize, code: String },
}

/// Failed to encode or decode a state snapshot.
#[derive(Debug, Error)]
#[error("snapshot encoding failed: {0}")]
pub struct SnapshotError(#[from] bincode::Error);
