//! Board coordinates and diagonal directions.
//!
//! A `Square` is always on the board: the only way to build one is through
//! constructors that check `0 <= row, col < BOARD_SIZE`. Probing off the board
//! (which jump landings do routinely at the edges) yields `None` instead of a
//! panic.
//!
//! ```
//! use checkers_engine::core::{Direction, Square};
//!
//! let sq = Square::new(5, 1).unwrap();
//! assert_eq!(sq.step(Direction::NorthWest), Square::new(4, 0));
//! assert_eq!(sq.step(Direction::NorthWest).unwrap().step(Direction::NorthWest), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OffBoard;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// An on-board cell, row 0 at the top edge.
///
/// Deserialization goes through the same bounds check as `Square::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Square`.
#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = OffBoard;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col).ok_or(OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Square {
    /// Create a square, or `None` if the coordinates are off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a square from signed coordinates.
    #[must_use]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        if is_in_range(row) && is_in_range(col) {
            Self::new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Create a square from a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(
                (index / BOARD_SIZE as usize) as u8,
                (index % BOARD_SIZE as usize) as u8,
            )
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The adjacent square in `dir`, if on the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Self::from_signed(
            i32::from(self.row) + i32::from(dr),
            i32::from(self.col) + i32::from(dc),
        )
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELL_COUNT).filter_map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Check a signed coordinate against the board size.
#[must_use]
pub fn is_in_range(v: i32) -> bool {
    (0..i32::from(BOARD_SIZE)).contains(&v)
}

/// One of the four diagonal directions.
///
/// "North" is toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// All directions in generation order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// (row, col) delta of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Row component of the delta.
    #[must_use]
    pub const fn row_delta(self) -> i8 {
        self.delta().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::from_signed(-1, 3).is_none());
        assert!(Square::from_signed(3, -1).is_none());
        assert!(Square::from_signed(3, 9).is_none());
    }

    #[test]
    fn test_square_index_roundtrip() {
        for (i, sq) in Square::all().enumerate() {
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_index(i), Some(sq));
        }
        assert_eq!(Square::all().count(), CELL_COUNT);
        assert!(Square::from_index(CELL_COUNT).is_none());
    }

    #[test]
    fn test_step_off_edges() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::NorthEast), None);
        assert_eq!(corner.step(Direction::NorthWest), None);
        assert_eq!(corner.step(Direction::SouthWest), None);
        assert_eq!(corner.step(Direction::SouthEast), Square::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Square::new(5, 1).unwrap()), "5,1");
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let sq: Square = serde_json::from_str(r#"{"row":3,"col":4}"#).unwrap();
        assert_eq!(sq, Square::new(3, 4).unwrap());

        let err = serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("square 9,0 is off the board"));
        assert!(serde_json::from_str::<Square>(r#"{"row":0,"col":8}"#).is_err());

        let bytes = bincode::serialize(&(9u8, 0u8)).unwrap();
        assert!(bincode::deserialize::<Square>(&bytes).is_err());
    }
}
