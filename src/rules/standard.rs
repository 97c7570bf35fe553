//! Standard checkers rules: the turn and capture-chain state machine.
//!
//! Applying a move:
//! 1. Relocate the piece.
//! 2. Crown a man that lands on its crown row.
//! 3. Remove the captured piece, if any.
//! 4. After a capture, the same piece must keep jumping while it can; its
//!    continuation jumps become the whole legal set and the side keeps the
//!    move. Crowning happens first, so a piece crowned mid-chain continues
//!    with king directions.
//! 5. Otherwise the turn passes and the other side's moves are generated.
//! 6. An empty legal set ends the game; the side to move loses.

use tracing::debug;

use super::engine::{MoveOutcome, RulesEngine};
use super::movegen::{available_moves, piece_jumps};
use crate::core::{EngineConfig, GameState, Move};
use crate::error::MoveError;

/// Standard 8×8 checkers rules with mandatory capture.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl StandardRules {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pass the move to the other side and generate its legal set.
    fn switch_sides(state: &mut GameState) {
        state.side = state.side.opponent();
        state.chain = None;
        state.legal_moves = available_moves(&state.board, state.side);
    }

    /// Mark the game over if the side to move cannot move.
    fn check_terminal(state: &mut GameState) {
        if state.legal_moves.is_empty() {
            state.game_over = true;
            state.losing_side = Some(state.side);
            debug!(loser = %state.side, "game over");
        }
    }
}

impl RulesEngine for StandardRules {
    fn initial_state(&self, config: &EngineConfig) -> GameState {
        let mut state = GameState::new(config.layout.clone(), config.first_side);
        state.legal_moves = self.legal_moves(&state);
        Self::check_terminal(&mut state);
        state
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        match state.chain.and_then(|sq| state.board.get(sq)) {
            Some(piece) => piece_jumps(&state.board, piece).into_vec(),
            None => available_moves(&state.board, state.side),
        }
    }

    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome, MoveError> {
        if state.game_over {
            return Err(MoveError::GameOver);
        }
        if !state.is_legal(mv) {
            return Err(MoveError::NotLegal(*mv));
        }

        let Some(piece) = state.board.relocate(mv.from, mv.to) else {
            return Err(MoveError::NotLegal(*mv));
        };
        let promoted = piece.crowns_on(mv.to) && piece.promote();
        let piece = *piece;

        if let Some(captured) = mv.captured {
            state.board.remove(captured);
        }

        let mut continues_chain = false;
        if mv.is_capture() {
            let continuation = piece_jumps(&state.board, &piece);
            if continuation.is_empty() {
                Self::switch_sides(state);
            } else {
                state.legal_moves = continuation.into_vec();
                state.chain = Some(mv.to);
                continues_chain = true;
            }
        } else {
            Self::switch_sides(state);
        }

        Self::check_terminal(state);

        debug!(
            mv = %mv,
            promoted,
            continues_chain,
            next = %state.side,
            legal = state.legal_moves.len(),
            "applied move"
        );

        Ok(MoveOutcome {
            applied: *mv,
            captured: mv.captured,
            promoted,
            continues_chain,
            next_side: state.side,
            game_over: state.game_over,
        })
    }
}
