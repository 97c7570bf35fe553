//! The 8×8 board.
//!
//! ## Probing
//!
//! `is_on_board`, `is_empty`, `is_opponent` and `is_own` take signed
//! coordinates and are total: anything off the board is simply `false`.
//! Generation probes one and two cells away from every piece, so edge pieces
//! probe off the board all the time.
//!
//! ## Layout maps
//!
//! Boards can be written as eight lines of eight two-character codes:
//! `--` for an empty cell, otherwise side (`l`/`d`) then kind (`m`/`k`).
//!
//! ```
//! use checkers_engine::core::{Board, Side};
//!
//! let board = Board::standard();
//! assert_eq!(board.piece_count(Side::Light), 12);
//! assert_eq!(Board::from_map(&board.to_map()).unwrap(), board);
//! ```

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::side::{Side, SideMap};
use super::square::{Square, BOARD_SIZE, CELL_COUNT};
use crate::error::LayoutError;

const N: usize = BOARD_SIZE as usize;

/// Standard starting layout: dark on top, light on the bottom.
pub const STANDARD_MAP: &str = "\
dm -- dm -- dm -- dm --
-- dm -- dm -- dm -- dm
dm -- dm -- dm -- dm --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- lm -- lm -- lm -- lm
lm -- lm -- lm -- lm --
-- lm -- lm -- lm -- lm";

/// Rendering view of one cell.
pub type Cell = Option<(PieceKind, Side)>;

/// An 8×8 grid; each cell holds at most one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// The standard starting layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for sq in Square::all() {
            let side = match sq.row() {
                0..=2 => Side::Dark,
                5..=7 => Side::Light,
                _ => continue,
            };
            if (sq.row() + sq.col()) % 2 == 0 {
                board.place(Piece::man(sq, side));
            }
        }
        board
    }

    // === Probing ===

    /// Whether signed coordinates fall on the board.
    #[must_use]
    pub fn is_on_board(&self, r: i32, c: i32) -> bool {
        Square::from_signed(r, c).is_some()
    }

    /// Whether the cell is on the board and holds no piece.
    #[must_use]
    pub fn is_empty(&self, r: i32, c: i32) -> bool {
        Square::from_signed(r, c).is_some_and(|sq| self.get(sq).is_none())
    }

    /// Whether the cell holds a piece not belonging to `side`.
    #[must_use]
    pub fn is_opponent(&self, r: i32, c: i32, side: Side) -> bool {
        self.piece_at(r, c).is_some_and(|p| p.side != side)
    }

    /// Whether the cell holds a piece belonging to `side`.
    #[must_use]
    pub fn is_own(&self, r: i32, c: i32, side: Side) -> bool {
        self.piece_at(r, c).is_some_and(|p| p.side == side)
    }

    /// The piece at signed coordinates, if on the board and occupied.
    #[must_use]
    pub fn piece_at(&self, r: i32, c: i32) -> Option<&Piece> {
        Square::from_signed(r, c).and_then(|sq| self.get(sq))
    }

    /// The piece on `sq`.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].as_ref()
    }

    fn slot(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }

    // === Mutation ===

    /// Put a piece on its square, returning whatever was there.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.slot(piece.square).replace(piece)
    }

    /// Take the piece off `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.slot(sq).take()
    }

    /// Move the piece on `from` to `to`, updating its stored square.
    ///
    /// Returns `None` (and changes nothing) if `from` is empty or `to` is
    /// occupied.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<&mut Piece> {
        if self.get(to).is_some() {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.square = to;
        let slot = self.slot(to);
        *slot = Some(piece);
        slot.as_mut()
    }

    // === Queries ===

    /// Pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(move |p| p.side == side)
    }

    /// Number of pieces belonging to `side`.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Piece counts for both sides.
    #[must_use]
    pub fn counts(&self) -> SideMap<usize> {
        SideMap::new(|side| self.piece_count(side))
    }

    /// Flat row-major view of every cell, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(CELL_COUNT);
        out.extend(
            self.cells
                .iter()
                .flatten()
                .map(|cell| cell.map(|p| (p.kind, p.side))),
        );
        out
    }

    // === Layout maps ===

    /// Parse a layout map.
    pub fn from_map(map: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != N {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != N {
                return Err(LayoutError::RowLength {
                    row,
                    len: codes.len(),
                });
            }

            for (col, code) in codes.into_iter().enumerate() {
                if code == "--" {
                    continue;
                }
                let unknown = || LayoutError::UnknownCode {
                    row,
                    col,
                    code: code.to_string(),
                };
                let mut chars = code.chars();
                let (Some(s), Some(k), None) = (chars.next(), chars.next(), chars.next()) else {
                    return Err(unknown());
                };
                let side = Side::from_code(s).ok_or_else(unknown)?;
                let kind = PieceKind::from_code(k).ok_or_else(unknown)?;
                let sq = Square::new(row as u8, col as u8).ok_or_else(unknown)?;
                board.place(Piece::new(sq, kind, side));
            }
        }

        Ok(board)
    }

    /// Render as a layout map (inverse of `from_map`).
    #[must_use]
    pub fn to_map(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or_else(|| "--".to_string(), |p| p.code()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::str::FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_map(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(r: u8, c: u8) -> Square {
        Square::new(r, c).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();

        assert_eq!(board.piece_count(Side::Light), 12);
        assert_eq!(board.piece_count(Side::Dark), 12);
        assert_eq!(board, Board::from_map(STANDARD_MAP).unwrap());

        assert_eq!(board.get(sq(0, 0)).map(|p| p.side), Some(Side::Dark));
        assert_eq!(board.get(sq(5, 1)).map(|p| p.side), Some(Side::Light));
        assert!(board.get(sq(3, 3)).is_none());
        assert!(board.get(sq(4, 4)).is_none());
    }

    #[test]
    fn test_probes_are_total() {
        let board = Board::standard();

        for (r, c) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-5, 12), (i32::MAX, i32::MIN)] {
            assert!(!board.is_on_board(r, c));
            assert!(!board.is_empty(r, c));
            assert!(!board.is_opponent(r, c, Side::Light));
            assert!(!board.is_own(r, c, Side::Light));
        }
    }

    #[test]
    fn test_probes_relative_to_side() {
        let board = Board::standard();

        assert!(board.is_own(5, 1, Side::Light));
        assert!(board.is_opponent(5, 1, Side::Dark));
        assert!(!board.is_empty(5, 1));
        assert!(board.is_empty(4, 0));
        assert!(!board.is_own(4, 0, Side::Light));
        assert!(!board.is_opponent(4, 0, Side::Light));
    }

    #[test]
    fn test_relocate_updates_piece() {
        let mut board = Board::standard();

        let piece = board.relocate(sq(5, 1), sq(4, 0)).copied().unwrap();
        assert_eq!(piece.square, sq(4, 0));
        assert!(board.get(sq(5, 1)).is_none());
        assert_eq!(board.get(sq(4, 0)), Some(&piece));

        // Occupied destination and empty source are refused.
        assert!(board.relocate(sq(7, 1), sq(6, 2)).is_none());
        assert!(board.relocate(sq(3, 3), sq(4, 4)).is_none());
        assert!(board.get(sq(7, 1)).is_some());
        assert_eq!(board.piece_count(Side::Light), 12);
    }

    #[test]
    fn test_remove() {
        let mut board = Board::standard();
        let removed = board.remove(sq(2, 2)).unwrap();

        assert_eq!(removed.side, Side::Dark);
        assert_eq!(board.piece_count(Side::Dark), 11);
        assert!(board.remove(sq(2, 2)).is_none());
    }

    #[test]
    fn test_snapshot_row_major() {
        let board = Board::standard();
        let snap = board.snapshot();

        assert_eq!(snap.len(), CELL_COUNT);
        assert_eq!(snap[0], Some((PieceKind::Man, Side::Dark)));
        assert_eq!(snap[1], None);
        assert_eq!(snap[5 * 8 + 1], Some((PieceKind::Man, Side::Light)));
        assert_eq!(snap.iter().filter(|c| c.is_some()).count(), 24);
    }

    #[test]
    fn test_map_errors() {
        assert_eq!(Board::from_map("-- --"), Err(LayoutError::RowCount(1)));

        let short_row = STANDARD_MAP.replacen("dm -- dm -- dm -- dm --", "dm -- dm", 1);
        assert_eq!(
            Board::from_map(&short_row),
            Err(LayoutError::RowLength { row: 0, len: 3 })
        );

        let bad_code = STANDARD_MAP.replacen("dm", "xq", 1);
        assert_eq!(
            Board::from_map(&bad_code),
            Err(LayoutError::UnknownCode {
                row: 0,
                col: 0,
                code: "xq".to_string()
            })
        );

        let too_long = STANDARD_MAP.replacen("dm", "dmk", 1);
        assert!(matches!(
            Board::from_map(&too_long),
            Err(LayoutError::UnknownCode { .. })
        ));
    }

    #[test]
    fn test_kings_in_map() {
        let map = "\
            -- -- -- -- -- -- -- --
            -- -- -- -- -- -- -- --
            -- -- -- -- -- -- -- --
            -- -- -- lk -- -- -- --
            -- -- -- -- dk -- -- --
            -- -- -- -- -- -- -- --
            -- -- -- -- -- -- -- --
            -- -- -- -- -- -- -- --";
        let board: Board = map.parse().unwrap();

        assert!(board.get(sq(3, 3)).unwrap().is_king());
        assert_eq!(board.get(sq(4, 4)).unwrap().side, Side::Dark);
        assert_eq!(board.to_string().lines().nth(3), Some("-- -- -- lk -- -- -- --"));
    }
}
