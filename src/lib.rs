//! Crate root module declarations for the Plum rules layer.
//!
//! The rules layer sits beneath a UI or engine that proposes moves by
//! origin/destination square: it validates turn order and king safety,
//! applies accepted moves, signals check and keeps a short undo history.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod piece_attacks;
    pub mod piece_reach;
}

pub mod rules {
    pub mod check_detector;
    pub mod config;
    pub mod errors;
    pub mod game;
    pub mod undo_manager;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use crate::game_state::board::Board;
pub use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
pub use crate::rules::config::RulesConfig;
pub use crate::rules::errors::{ChessError, ChessResult};
pub use crate::rules::game::{Chess, GameState};
