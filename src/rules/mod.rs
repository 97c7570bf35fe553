//! Checkers rules.
//!
//! - `movegen`: step and jump generation, mandatory capture
//! - `engine`: the `RulesEngine` trait, `GameResult` and `MoveOutcome`
//! - `standard`: `StandardRules`, the turn and capture-chain state machine
//!
//! Rules engines never own state; `GameState` is passed in and out.

pub mod movegen;
pub mod engine;
pub mod standard;

pub use engine::{GameResult, MoveOutcome, RulesEngine};
pub use standard::StandardRules;
