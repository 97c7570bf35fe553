//! Pieces: a kind, a side, and the square they stand on.
//!
//! Men move and jump only in their side's two forward directions; kings use
//! all four diagonals. A piece never changes side. Its kind only ever changes
//! from man to king.

use serde::{Deserialize, Serialize};

use super::side::Side;
use super::square::{Direction, Square};

/// Kind of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    /// Layout-map code character (`m` / `k`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Man => 'm',
            PieceKind::King => 'k',
        }
    }

    /// Parse a layout-map code character.
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'm' => Some(PieceKind::Man),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Current square.
    pub square: Square,
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[must_use]
    pub const fn new(square: Square, kind: PieceKind, side: Side) -> Self {
        Self { square, kind, side }
    }

    #[must_use]
    pub const fn man(square: Square, side: Side) -> Self {
        Self::new(square, PieceKind::Man, side)
    }

    #[must_use]
    pub const fn king(square: Square, side: Side) -> Self {
        Self::new(square, PieceKind::King, side)
    }

    #[must_use]
    pub fn is_man(&self) -> bool {
        self.kind == PieceKind::Man
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Whether this piece may move or jump in `dir`.
    #[must_use]
    pub fn can_move(&self, dir: Direction) -> bool {
        match self.kind {
            PieceKind::King => true,
            PieceKind::Man => dir.row_delta() == self.side.forward(),
        }
    }

    /// Directions this piece may move or jump in, in generation order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |&d| self.can_move(d))
    }

    /// Whether landing on `square` would crown this piece.
    #[must_use]
    pub fn crowns_on(&self, square: Square) -> bool {
        self.is_man() && square.row() == self.side.crown_row()
    }

    /// Promote to king. Returns true if the kind changed.
    pub fn promote(&mut self) -> bool {
        let was_man = self.is_man();
        self.kind = PieceKind::King;
        was_man
    }

    /// Two-character layout-map code, e.g. `lm` or `dk`.
    #[must_use]
    pub fn code(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.side.code());
        s.push(self.kind.code());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(r: u8, c: u8) -> Square {
        Square::new(r, c).unwrap()
    }

    #[test]
    fn test_man_directions() {
        let light = Piece::man(sq(5, 1), Side::Light);
        let dirs: Vec<_> = light.directions().collect();
        assert_eq!(dirs, vec![Direction::NorthEast, Direction::NorthWest]);

        let dark = Piece::man(sq(2, 2), Side::Dark);
        let dirs: Vec<_> = dark.directions().collect();
        assert_eq!(dirs, vec![Direction::SouthEast, Direction::SouthWest]);
    }

    #[test]
    fn test_king_directions() {
        let king = Piece::king(sq(4, 4), Side::Dark);
        assert_eq!(king.directions().count(), 4);
    }

    #[test]
    fn test_crowning() {
        let mut light = Piece::man(sq(1, 1), Side::Light);
        assert!(light.crowns_on(sq(0, 0)));
        assert!(!light.crowns_on(sq(7, 0)));

        assert!(light.promote());
        assert!(light.is_king());
        // Already a king: no change, and kings never crown again.
        assert!(!light.promote());
        assert!(!light.crowns_on(sq(0, 2)));
    }

    #[test]
    fn test_codes() {
        assert_eq!(Piece::man(sq(0, 0), Side::Dark).code(), "dm");
        assert_eq!(Piece::king(sq(0, 0), Side::Light).code(), "lk");
        assert_eq!(PieceKind::from_code('k'), Some(PieceKind::King));
        assert_eq!(PieceKind::from_code('-'), None);
    }
}
