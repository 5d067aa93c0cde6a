//! Ember Chess - deterministic chess rules engine with a fixed-depth
//! alpha-beta AI

pub mod core;
pub mod engine;
pub mod game;

pub use crate::core::board::{Board, CastlingRights, Color, Piece, PieceType, Square};
pub use crate::core::moves::Move;
pub use crate::engine::movegen::{legal_moves, perft, pseudo_legal_moves};
pub use crate::engine::search::{best_move, Difficulty, SearchStats};
pub use crate::game::{Game, GameError, GameStatus};
