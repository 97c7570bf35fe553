//! The engine facade handed to a presentation layer.
//!
//! `Engine` owns one `GameState` and the configuration it was started from,
//! and is the single writer of that state. It is not meant for concurrent
//! mutation: wrap it in one lock, or keep it on one thread.
//!
//! ```
//! use checkers_engine::{Engine, Side, Square};
//!
//! let mut engine = Engine::new();
//! let sq = |r, c| Square::new(r, c).unwrap();
//!
//! let outcome = engine.apply_proposed(sq(5, 1), sq(4, 0)).unwrap();
//! assert_eq!(outcome.next_side, Side::Dark);
//!
//! engine.reset();
//! assert_eq!(engine.side_to_move(), Side::Light);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Cell, EngineConfig, GameState, Move, Side, SideMap, Square, BOARD_SIZE};
use crate::error::MoveError;
use crate::rules::{GameResult, MoveOutcome, RulesEngine, StandardRules};

const N: usize = BOARD_SIZE as usize;

/// A playable checkers game.
#[derive(Clone, Debug)]
pub struct Engine<R: RulesEngine = StandardRules> {
    config: EngineConfig,
    rules: R,
    state: GameState,
}

impl Engine<StandardRules> {
    /// Standard rules, standard layout, light to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Standard rules from a custom starting configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_rules(StandardRules, config)
    }
}

impl Default for Engine<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine> Engine<R> {
    /// Build an engine with explicit rules.
    pub fn with_rules(rules: R, config: EngineConfig) -> Self {
        let state = rules.initial_state(&config);
        Self {
            config,
            rules,
            state,
        }
    }

    /// Return to the configured starting position.
    pub fn reset(&mut self) {
        self.state = self.rules.initial_state(&self.config);
        debug!(
            side = %self.state.side,
            legal = self.state.legal_moves.len(),
            "reset"
        );
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.state.side
    }

    /// Current legal-move set.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.state.legal_moves
    }

    /// Row-major board contents, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.state.snapshot()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    #[must_use]
    pub fn losing_side(&self) -> Option<Side> {
        self.state.losing_side
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.state.board.piece_count(side)
    }

    /// Pieces left on each side.
    #[must_use]
    pub fn piece_counts(&self) -> SideMap<usize> {
        self.state.board.counts()
    }

    /// Destinations of legal moves starting at `from`.
    #[must_use]
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        self.rules.destinations(&self.state, from)
    }

    /// Highlight grid for the piece on `from`.
    #[must_use]
    pub fn move_map(&self, from: Square) -> MoveMap {
        MoveMap::new(from, &self.destinations(from))
    }

    // === Mutation ===

    /// Apply a move from the legal set. Anything else is rejected and the
    /// state is left as it was.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.rules.apply_move(&mut self.state, &mv)
    }

    /// Apply the legal move from `from` to `to`.
    pub fn apply_proposed(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.rules.apply_proposed(&mut self.state, from, to)
    }

    /// Replace the current state, e.g. with one decoded from a snapshot.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }
}

/// Marker for one cell of a `MoveMap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    Blank,
    /// The selected piece.
    Origin,
    /// A legal destination of the selected piece.
    Target,
}

/// 8×8 highlight grid for one selected piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMap {
    cells: [[Marker; N]; N],
}

impl MoveMap {
    fn new(from: Square, targets: &[Square]) -> Self {
        let mut cells = [[Marker::Blank; N]; N];
        cells[from.row() as usize][from.col() as usize] = Marker::Origin;
        for to in targets {
            cells[to.row() as usize][to.col() as usize] = Marker::Target;
        }
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, sq: Square) -> Marker {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Squares marked as targets, row-major.
    pub fn targets(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq) == Marker::Target)
    }
}

impl std::fmt::Display for MoveMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for marker in row {
                let c = match marker {
                    Marker::Blank => '-',
                    Marker::Origin => 'o',
                    Marker::Target => 'x',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
