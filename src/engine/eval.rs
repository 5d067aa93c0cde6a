//! Static evaluation
//!
//! Centipawn material count plus a flat bonus for pawns and knights that
//! occupy the four central squares. The score is relative to the side to
//! move, which keeps it compatible with negamax sign flipping.

use crate::core::board::{Board, PieceType, Square};

/// Flat bonus for a pawn or knight on the central 2x2 block
const CENTER_BONUS: i32 = 20;

/// Centipawn value of a piece type
pub const fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 20000,
    }
}

#[inline]
const fn is_central(sq: Square) -> bool {
    let file = sq.file();
    let rank = sq.rank();
    file >= 3 && file <= 4 && rank >= 3 && rank <= 4
}

/// Evaluate the board from the perspective of the side to move
/// (positive favors the mover)
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for sq in (0..64).map(Square::new) {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };

        let mut value = piece_value(piece.piece_type);
        if matches!(piece.piece_type, PieceType::Pawn | PieceType::Knight) && is_central(sq) {
            value += CENTER_BONUS;
        }

        if piece.color == board.side_to_move {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}
