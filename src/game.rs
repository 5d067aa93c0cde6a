//! Game session layer
//!
//! Owns the authoritative board for one game, validates user-proposed moves
//! against the legal move set before applying them, reports game status,
//! and drives AI replies. Front ends (board rendering, click handling,
//! network transports) call into this layer and never mutate the board
//! directly, which keeps `Board::make_move`'s no-validation contract safe.

use rand::Rng;
use thiserror::Error;

use crate::core::board::{Board, Color, PieceType, Square};
use crate::core::moves::Move;
use crate::engine::movegen::legal_moves;
use crate::engine::search::{best_move, Difficulty};

/// Errors that can occur when driving a game
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The proposed move is not in the legal move set
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// No legal moves remain (checkmate or stalemate)
    #[error("game is over")]
    GameOver,
}

/// Outcome-level state of a game
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    /// The side to move is checkmated; `winner` delivered the mate
    Checkmate { winner: Color },
    Stalemate,
}

/// One chess game against the engine or another caller-driven opponent
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a new game from the standard setup
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
        }
    }

    /// Resume a game from an existing position
    pub fn from_board(board: Board) -> Self {
        Game { board }
    }

    /// Read-only view of the current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Reset to the starting position
    pub fn reset(&mut self) {
        self.board = Board::startpos();
    }

    /// Current status, derived from the legal move set and the check state
    pub fn status(&self) -> GameStatus {
        if !legal_moves(&self.board).is_empty() {
            return GameStatus::InProgress;
        }
        let mover = self.board.side_to_move;
        if self.board.is_in_check(mover) {
            GameStatus::Checkmate {
                winner: mover.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Apply a user-proposed move after validating it against `legal_moves`.
    ///
    /// A `promotion` of `None` accepts the first generated promotion for the
    /// destination, which is always the queen. Returns the move actually
    /// applied.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<Move, GameError> {
        let moves = legal_moves(&self.board);
        if moves.is_empty() {
            return Err(GameError::GameOver);
        }
        let matched = moves.into_iter().find(|m| {
            m.from == from && m.to == to && (promotion.is_none() || m.promotion == promotion)
        });
        match matched {
            Some(mv) => {
                self.board.make_move(mv);
                Ok(mv)
            }
            None => Err(GameError::IllegalMove(Move {
                from,
                to,
                promotion,
            })),
        }
    }

    /// Let the engine pick and apply a move for the side to move
    pub fn play_ai_move<R: Rng>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Move, GameError> {
        let mv = best_move(&self.board, difficulty, rng).ok_or(GameError::GameOver)?;
        self.board.make_move(mv);
        Ok(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
