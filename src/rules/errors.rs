//! Error taxonomy of the rules layer.

use crate::game_state::chess_types::{Color, Square};
use crate::utils::algebraic::square_label;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// No piece stands on the requested origin.
    #[error("no piece at {}", square_label(.square))]
    InvalidPiece { square: Square },

    /// The piece belongs to the side that is not on move.
    #[error("it's not {color}'s turn")]
    NotYourTurn { color: Color },

    /// Rejected move (self-check or unreachable destination) or an undo with
    /// nothing left to restore. Game state is untouched.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// The move WAS applied and left `color` in check.
    #[error("{color} is in check")]
    Check { color: Color },

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot failed: {0}")]
    Snapshot(String),
}

impl ChessError {
    /// True when the call that produced this error still committed its move.
    #[inline]
    pub fn is_committed(&self) -> bool {
        matches!(self, ChessError::Check { .. })
    }
}
