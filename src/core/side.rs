//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two colours of a checkers game. Light starts on the bottom three rows
//! and moves first; dark starts on the top three rows.
//!
//! ## SideMap
//!
//! Per-side tallies (piece counts, captures, promotions) backed by a
//! two-element array and indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::square::BOARD_SIZE;

/// One of the two sides of a checkers game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Starts on rows 5-7, moves toward row 0.
    Light,
    /// Starts on rows 0-2, moves toward row 7.
    Dark,
}

impl Side {
    /// Both sides, light first.
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    /// Get the raw side index (light = 0, dark = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a forward step for a man of this side.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// The row on which a man of this side is crowned.
    #[must_use]
    pub const fn crown_row(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => BOARD_SIZE - 1,
        }
    }

    /// Layout-map code character (`l` / `d`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Side::Light => 'l',
            Side::Dark => 'd',
        }
    }

    /// Parse a layout-map code character.
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'l' => Some(Side::Light),
            'd' => Some(Side::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Light => write!(f, "light"),
            Side::Dark => write!(f, "dark"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use checkers_engine::core::{Side, SideMap};
///
/// let mut captures: SideMap<u32> = SideMap::default();
/// captures[Side::Dark] += 1;
///
/// assert_eq!(captures[Side::Light], 0);
/// assert_eq!(captures[Side::Dark], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Light), factory(Side::Dark)],
        }
    }

    /// Iterate over (Side, &T) pairs, light first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
