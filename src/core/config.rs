//! Engine configuration.
//!
//! A configuration fixes where a game starts: the board layout and the side
//! that moves first. The defaults are the standard 8×8 layout with light to
//! move. Custom layouts are mostly useful for tests and puzzles.
//!
//! ```
//! use checkers_engine::core::{EngineConfig, Side};
//!
//! let config = EngineConfig::default().with_first_side(Side::Dark);
//! assert_eq!(config.first_side, Side::Dark);
//! ```

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::side::Side;
use crate::error::LayoutError;

/// Starting conditions for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board layout restored on every reset.
    pub layout: Board,

    /// Side to move at the start of the game.
    pub first_side: Side,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: Board::standard(),
            first_side: Side::Light,
        }
    }
}

impl EngineConfig {
    /// Standard layout, light to move.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Configuration starting from a text layout map, light to move.
    pub fn from_map(map: &str) -> Result<Self, LayoutError> {
        Ok(Self::default().with_layout(Board::from_map(map)?))
    }

    /// Set the starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Board) -> Self {
        self.layout = layout;
        self
    }

    /// Set the side to move first.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }
}
