//! Fixed-depth negamax search with alpha-beta pruning
//!
//! Each node clones the board, applies a candidate move, and recurses with
//! negated, swapped bounds. Search state lives entirely on the stack; a
//! search is a pure function of the input position and depth, so results
//! for Medium and Hard are deterministic. Easy skips the search and picks
//! uniformly from the legal moves through an injected random source.

use log::debug;
use rand::{Rng, RngExt};

use crate::core::board::Board;
use crate::core::moves::Move;
use crate::engine::eval::evaluate;
use crate::engine::movegen::legal_moves;

/// Score bound; forced mates are expressed relative to it
pub const INFINITY: i32 = 1_000_000;

/// AI strength selector
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Depth-2 search
    Medium,
    /// Depth-4 search
    Hard,
}

impl Difficulty {
    /// Search depth in plies (Easy does not search)
    pub const fn depth(self) -> i32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 2,
            Difficulty::Hard => 4,
        }
    }
}

/// Counters accumulated over one search call
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Pick a move for the side to move, or `None` when no legal move exists
/// (checkmate or stalemate; callers disambiguate via `Board::is_in_check`).
///
/// The random source is only consulted at Easy difficulty; passing a seeded
/// generator makes that path reproducible.
pub fn best_move<R: Rng>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Option<Move> {
    let mut moves = legal_moves(board);
    if moves.is_empty() {
        return None;
    }

    if difficulty == Difficulty::Easy {
        return Some(moves[rng.random_range(0..moves.len())]);
    }

    let depth = difficulty.depth();
    let mut stats = SearchStats::default();

    // Captures first. The sort is stable, so quiet moves keep their
    // generation order behind the captures.
    moves.sort_by_key(|mv| board.piece_at(mv.to).is_none());

    let mut best = None;
    let mut best_value = -INFINITY;
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for mv in moves {
        let mut next = board.clone();
        next.make_move(mv);
        let value = -negamax(&next, depth - 1, -beta, -alpha, &mut stats);

        if value > best_value {
            best_value = value;
            best = Some(mv);
        }
        alpha = alpha.max(best_value);
    }

    debug!(
        "search depth {} value {} nodes {}",
        depth, best_value, stats.nodes
    );
    best
}

/// Negamax with alpha-beta pruning.
///
/// Returns the value of the position for the side to move. Terminal nodes
/// with no legal moves score `-INFINITY + (100 - depth)` when in check, so
/// a mate found closer to the root outranks one found deeper, and 0 for
/// stalemate. Sibling exploration stops once `alpha >= beta`.
pub fn negamax(board: &Board, depth: i32, mut alpha: i32, beta: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board);
    if moves.is_empty() {
        return if board.is_in_check(board.side_to_move) {
            -INFINITY + (100 - depth)
        } else {
            0
        };
    }

    let mut best_value = -INFINITY;
    for mv in moves {
        let mut next = board.clone();
        next.make_move(mv);
        let value = -negamax(&next, depth - 1, -beta, -alpha, stats);

        best_value = best_value.max(value);
        alpha = alpha.max(best_value);
        if alpha >= beta {
            break;
        }
    }
    best_value
}
