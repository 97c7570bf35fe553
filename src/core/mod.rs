//! Core types: sides, squares, pieces, the board, moves, state, RNG and
//! configuration.
//!
//! This module holds plain data. The rules that give it meaning live in
//! `rules`.

pub mod side;
pub mod square;
pub mod piece;
pub mod board;
pub mod moves;
pub mod state;
pub mod config;
pub mod rng;

pub use side::{Side, SideMap};
pub use square::{Direction, Square, BOARD_SIZE, CELL_COUNT};
pub use piece::{Piece, PieceKind};
pub use board::{Board, Cell, STANDARD_MAP};
pub use moves::{Move, PieceMoves};
pub use state::GameState;
pub use config::EngineConfig;
pub use rng::{GameRng, GameRngState};
