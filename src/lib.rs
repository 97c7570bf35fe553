//! # checkers-engine
//!
//! A checkers (draughts) rule engine for the standard 8×8 game.
//!
//! ## Rules
//!
//! 1. **Men move forward**: one diagonal step toward the opponent's edge.
//!    Kings step along all four diagonals.
//!
//! 2. **Capture is mandatory**: if any piece of the side to move can jump,
//!    only jumps are legal.
//!
//! 3. **Chains continue**: after a jump, the same piece keeps jumping while it
//!    can, and the side keeps the move until it cannot.
//!
//! 4. **Crowning is immediate**: a man reaching its crown row becomes a king
//!    on landing, before any continuation jump is looked for.
//!
//! 5. **No moves, no game**: the side to move loses when it has no legal move,
//!    whether or not it still has pieces.
//!
//! ## Architecture
//!
//! - **Plain state**: `GameState` is data. A stateless `RulesEngine` threads
//!   it through every operation.
//!
//! - **Single writer**: `Engine` owns one state and is the only thing that
//!   mutates it. Share it behind one lock if you must share it at all.
//!
//! - **Rejection, not panics**: moves outside the legal set are refused with
//!   a `MoveError` and leave the state untouched.
//!
//! ## Modules
//!
//! - `core`: Sides, squares, pieces, board, moves, state, RNG, configuration
//! - `rules`: Move generation and the `RulesEngine` state machine
//! - `engine`: `Engine` facade for a presentation layer
//! - `playout`: Seeded random playouts
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod engine;
pub mod playout;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, EngineConfig, GameRng, GameState, Move, Piece, PieceKind, Side,
    SideMap, Square, BOARD_SIZE,
};

pub use crate::rules::{GameResult, MoveOutcome, RulesEngine, StandardRules};

pub use crate::engine::{Engine, Marker, MoveMap};

pub use crate::playout::PlayoutReport;

pub use crate::error::{LayoutError, MoveError, OffBoard, SnapshotError};
