//! Move and jump generation.
//!
//! Steps and jumps are generated per piece, in direction order NE, SE, SW,
//! NW, and per side in row-major piece order. The mandatory-capture rule is
//! applied in `available_moves`: if the side has any jump at all, only jumps
//! are legal.

use tracing::trace;

use crate::core::{Board, Move, Piece, PieceMoves, Side};

/// Non-capturing steps for `piece`.
#[must_use]
pub fn piece_steps(board: &Board, piece: &Piece) -> PieceMoves {
    piece
        .directions()
        .filter_map(|dir| piece.square.step(dir))
        .filter(|&to| board.get(to).is_none())
        .map(|to| Move::step(piece.square, to))
        .collect()
}

/// Jumps available to `piece` from its current square.
///
/// A jump needs an opposing piece on the adjacent cell and an empty landing
/// cell beyond it.
#[must_use]
pub fn piece_jumps(board: &Board, piece: &Piece) -> PieceMoves {
    let mut jumps = PieceMoves::new();
    for dir in piece.directions() {
        let Some(over) = piece.square.step(dir) else {
            continue;
        };
        if !board.get(over).is_some_and(|p| p.side != piece.side) {
            continue;
        }
        let Some(land) = over.step(dir) else {
            continue;
        };
        if board.get(land).is_none() {
            jumps.push(Move::jump(piece.square, land, over));
        }
    }
    jumps
}

/// All non-capturing steps for `side`.
#[must_use]
pub fn side_steps(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|piece| piece_steps(board, piece))
        .collect()
}

/// All jumps for `side`.
#[must_use]
pub fn side_jumps(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|piece| piece_jumps(board, piece))
        .collect()
}

/// The legal-move set for `side` at the start of a turn.
///
/// Every jump the side has if there is at least one, otherwise every step.
#[must_use]
pub fn available_moves(board: &Board, side: Side) -> Vec<Move> {
    let jumps = side_jumps(board, side);
    if !jumps.is_empty() {
        trace!(%side, jumps = jumps.len(), "capture is mandatory");
        return jumps;
    }

    let steps = side_steps(board, side);
    trace!(%side, steps = steps.len(), "no captures available");
    steps
}
