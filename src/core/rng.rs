//! Seeded move picking for playouts.
//!
//! `GameRng` wraps ChaCha8 so that a seed fully determines a random game.
//! Batches of games draw from forked streams, and any stream position can
//! be captured as a `GameRngState` and resumed later to replay one game.
//!
//! ```
//! use checkers_engine::core::GameRng;
//! use checkers_engine::Engine;
//!
//! let engine = Engine::new();
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_move(engine.legal_moves()), b.pick_move(engine.legal_moves()));
//!
//! let mut child_a = a.fork();
//! let mut child_b = b.fork();
//! assert_eq!(child_a.state(), child_b.state());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Split off a child stream. The n-th fork of a given seed is always the
    /// same stream, and differs from the parent.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Pick one move uniformly, or `None` from an empty legal set.
    pub fn pick_move(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.inner).copied()
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Resumable position of a `GameRng` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    pub forks: u64,
}
