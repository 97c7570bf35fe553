//! Move representation: source, destination and an optional capture.
//!
//! A move is one ply of one piece. A jump carries the square of the piece it
//! captures; a simple step carries nothing. Multi-jump chains are a sequence
//! of jumps applied one at a time, each regenerated from the landing square.
//!
//! ```
//! use checkers_engine::core::{Move, Square};
//!
//! let sq = |r, c| Square::new(r, c).unwrap();
//!
//! let step = Move::step(sq(5, 1), sq(4, 0));
//! assert!(!step.is_capture());
//!
//! let jump = Move::jump(sq(5, 1), sq(3, 3), sq(4, 2));
//! assert_eq!(jump.captured, Some(sq(4, 2)));
//! assert_eq!(jump.to_string(), "5,1->3,3 X 4,2");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::square::Square;

/// A single ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the captured piece, for jumps.
    pub captured: Option<Square>,
}

/// Moves of a single piece: at most four, one per direction.
pub type PieceMoves = SmallVec<[Move; 4]>;

impl Move {
    /// A non-capturing diagonal step.
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// A jump over `captured`.
    #[must_use]
    pub const fn jump(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether this move goes from `from` to `to`.
    #[must_use]
    pub fn connects(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " X {}", captured)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(r: u8, c: u8) -> Square {
        Square::new(r, c).unwrap()
    }

    #[test]
    fn test_step_and_jump() {
        let step = Move::step(sq(2, 2), sq(3, 3));
        assert!(!step.is_capture());
        assert!(step.connects(sq(2, 2), sq(3, 3)));
        assert!(!step.connects(sq(3, 3), sq(2, 2)));

        let jump = Move::jump(sq(2, 2), sq(4, 4), sq(3, 3));
        assert!(jump.is_capture());
        assert_ne!(step, jump);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::step(sq(5, 1), sq(4, 0)).to_string(), "5,1->4,0");
        assert_eq!(
            Move::jump(sq(2, 2), sq(4, 4), sq(3, 3)).to_string(),
            "2,2->4,4 X 3,3"
        );
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::jump(sq(2, 2), sq(4, 4), sq(3, 3));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();

        assert_eq!(mv, deserialized);
    }
}
