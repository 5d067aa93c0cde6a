//! Move representation
//!
//! A move names its source and destination squares plus an optional
//! promotion piece, set only when a pawn move reaches the far rank.
//! Captures, castling, and en passant are recognized from the board the
//! move is applied to, not flagged on the move itself.

use super::board::{PieceType, Square};
use std::fmt;

/// A chess move
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Create a normal move
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    pub const fn new_promotion(from: Square, to: Square, piece: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Convert to long algebraic notation (e.g., "e2e4", "e7e8q")
    pub fn to_algebraic(self) -> String {
        let mut s = format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic());
        if let Some(piece) = self.promotion {
            s.push(piece.to_char());
        }
        s
    }

    /// Parse from long algebraic notation
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        if s.len() == 5 {
            let piece = match s.chars().nth(4)? {
                'n' | 'N' => PieceType::Knight,
                'b' | 'B' => PieceType::Bishop,
                'r' | 'R' => PieceType::Rook,
                'q' | 'Q' => PieceType::Queen,
                _ => return None,
            };
            Some(Move::new_promotion(from, to, piece))
        } else {
            Some(Move::new(from, to))
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
