//! Move generation
//!
//! Pseudo-legal moves obey a piece's movement shape but may leave the
//! mover's own king in check; `legal_moves` filters them by applying each
//! candidate to a cloned board and rejecting those that end with the mover
//! in check. The clone/apply/check filter is the legality oracle for both
//! caller-side move validation and search-tree expansion.

use crate::core::board::{Board, Color, Piece, PieceType, Square};
use crate::core::moves::Move;

/// Knight move offsets as (file, rank) deltas
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Bishop ray directions
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook ray directions
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Queen ray directions; also the king's single-step ring
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all pseudo-legal moves for the side to move
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for sq in (0..64).map(Square::new) {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        if piece.color != board.side_to_move {
            continue;
        }
        match piece.piece_type {
            PieceType::Pawn => pawn_moves(board, sq, piece.color, &mut moves),
            PieceType::Knight => knight_moves(board, sq, piece.color, &mut moves),
            PieceType::Bishop => {
                sliding_moves(board, sq, piece.color, &BISHOP_DIRECTIONS, &mut moves)
            }
            PieceType::Rook => sliding_moves(board, sq, piece.color, &ROOK_DIRECTIONS, &mut moves),
            PieceType::Queen => {
                sliding_moves(board, sq, piece.color, &QUEEN_DIRECTIONS, &mut moves)
            }
            PieceType::King => king_moves(board, sq, piece.color, &mut moves),
        }
    }
    moves
}

/// Generate all fully legal moves for the side to move
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mover = board.side_to_move;
    pseudo_legal_moves(board)
        .into_iter()
        .filter(|&mv| {
            let mut next = board.clone();
            next.make_move(mv);
            !next.is_in_check(mover)
        })
        .collect()
}

/// Push a pawn move, expanding it into the four promotion choices
/// (queen, rook, bishop, knight, in that order) on the far rank.
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, promotion_rank: u8) {
    if to.rank() == promotion_rank {
        moves.push(Move::new_promotion(from, to, PieceType::Queen));
        moves.push(Move::new_promotion(from, to, PieceType::Rook));
        moves.push(Move::new_promotion(from, to, PieceType::Bishop));
        moves.push(Move::new_promotion(from, to, PieceType::Knight));
    } else {
        moves.push(Move::new(from, to));
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();
    let promotion_rank = color.promotion_rank();

    // Single push, and from the starting rank a double push through an
    // empty intermediate square.
    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            push_pawn_move(moves, from, one, promotion_rank);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant onto the stored target.
    for d_file in [-1, 1] {
        if let Some(to) = from.offset(d_file, dir) {
            match board.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(moves, from, to, promotion_rank)
                }
                None if board.en_passant == Some(to) => moves.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_file, d_rank) {
            match board.piece_at(to) {
                Some(target) if target.color == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_file, d_rank) in directions {
        let mut cursor = from.offset(d_file, d_rank);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(target) => {
                    if target.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cursor = to.offset(d_file, d_rank);
        }
    }
}

fn king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for (d_file, d_rank) in QUEEN_DIRECTIONS {
        if let Some(to) = from.offset(d_file, d_rank) {
            match board.piece_at(to) {
                Some(target) if target.color == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
    castling_moves(board, from, color, moves);
}

/// Emit castling as a two-file king move when the corresponding right is
/// still set, king and rook stand on their home squares, the path between
/// them is empty, the king is not in check, and the square the king passes
/// through is not attacked. The destination square is covered by the
/// legality filter like any other move.
fn castling_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let rank = color.back_rank();
    if from != Square::from_file_rank(4, rank) {
        return;
    }
    let enemy = color.opposite();
    let rook = Some(Piece::new(PieceType::Rook, color));

    if board.castling.can_castle_kingside(color) {
        let f = Square::from_file_rank(5, rank);
        let g = Square::from_file_rank(6, rank);
        if board.piece_at(Square::from_file_rank(7, rank)) == rook
            && board.piece_at(f).is_none()
            && board.piece_at(g).is_none()
            && !board.is_attacked(from, enemy)
            && !board.is_attacked(f, enemy)
        {
            moves.push(Move::new(from, g));
        }
    }

    if board.castling.can_castle_queenside(color) {
        let b = Square::from_file_rank(1, rank);
        let c = Square::from_file_rank(2, rank);
        let d = Square::from_file_rank(3, rank);
        if board.piece_at(Square::from_file_rank(0, rank)) == rook
            && board.piece_at(b).is_none()
            && board.piece_at(c).is_none()
            && board.piece_at(d).is_none()
            && !board.is_attacked(from, enemy)
            && !board.is_attacked(d, enemy)
        {
            moves.push(Move::new(from, c));
        }
    }
}

/// Count leaf nodes of the legal move tree to a fixed depth
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| {
            let mut next = board.clone();
            next.make_move(mv);
            perft(&next, depth - 1)
        })
        .sum()
}
