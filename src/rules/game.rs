//! The game object: move orchestration, check signalling and undo.
//!
//! `Chess` is the single entry point a UI or engine talks to. A move request
//! runs four gates in order (piece present, right color, optional geometric
//! reach, own king safe). Only after all pass is the prior state captured and
//! the board mutated. The post-move check test reports through
//! `ChessError::Check`, which means the move has already been committed.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_reach::is_geometrically_legal;
use crate::rules::check_detector;
use crate::rules::config::RulesConfig;
use crate::rules::errors::{ChessError, ChessResult};
use crate::rules::undo_manager::{Memento, UndoManager};
use crate::utils::algebraic::{parse_square, square_label};

/// Everything a memento captures: the live board plus the log of pre-move
/// boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub history: Vec<Board>,
}

impl GameState {
    fn new(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chess {
    state: GameState,
    undo_stack: UndoManager,
    config: RulesConfig,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Chess {
    /// Game from the standard starting position.
    pub fn new() -> Self {
        Self {
            state: GameState::new(Board::new_game()),
            undo_stack: UndoManager::new(),
            config: RulesConfig::default(),
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Self::with_config(RulesConfig::from_fen(fen))
    }

    pub fn with_config(config: RulesConfig) -> ChessResult<Self> {
        let board = Board::from_fen(&config.starting_fen)?;
        Ok(Self {
            state: GameState::new(board),
            undo_stack: UndoManager::new(),
            config,
        })
    }

    /// Back to the configured starting position with no history and nothing
    /// to undo.
    pub fn restart(&mut self) -> ChessResult<()> {
        self.state = GameState::new(Board::from_fen(&self.config.starting_fen)?);
        self.undo_stack.clear();
        debug!("restarted from {}", self.config.starting_fen);
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    pub fn fen(&self) -> &str {
        self.state.board.fen()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.board.side_to_move
    }

    /// Boards as they stood before each move still on record.
    #[inline]
    pub fn history(&self) -> &[Board] {
        &self.state.history
    }

    /// How many consecutive `undo` calls would currently succeed.
    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        check_detector::in_check(&self.state.board, color)
    }

    #[inline]
    pub fn would_be_in_check(&self, origin: Square, destination: Square) -> ChessResult<bool> {
        check_detector::would_be_in_check(&self.state.board, origin, destination)
    }

    /// Draw rules are not implemented; no position is ever reported drawn.
    #[inline]
    pub fn is_draw(&self) -> bool {
        false
    }

    /// `move_piece` with algebraic coordinates, e.g. `play("e2", "e4")`.
    pub fn play(&mut self, origin: &str, destination: &str) -> ChessResult<()> {
        let origin = parse_square(origin)?;
        let destination = parse_square(destination)?;
        self.move_piece(origin, destination)
    }

    /// Validate and apply a move.
    ///
    /// Rejections (`InvalidPiece`, `NotYourTurn`, `InvalidMove`) leave the
    /// game untouched. `Err(Check)` is returned AFTER the move is applied and
    /// names the side now in check.
    pub fn move_piece(&mut self, origin: Square, destination: Square) -> ChessResult<()> {
        let piece = self
            .state
            .board
            .piece_at(origin)
            .ok_or(ChessError::InvalidPiece { square: origin })?;

        if piece.color != self.state.board.side_to_move {
            return Err(ChessError::NotYourTurn { color: piece.color });
        }

        if !is_valid_square(destination) {
            return Err(ChessError::InvalidMove(format!(
                "destination {} is off the board",
                square_label(&destination)
            )));
        }

        if self.config.enforce_piece_geometry
            && !is_geometrically_legal(&self.state.board, origin, destination)
        {
            return Err(ChessError::InvalidMove(format!(
                "{:?} on {} cannot reach {}",
                piece.kind,
                square_label(&origin),
                square_label(&destination)
            )));
        }

        if self.would_be_in_check(origin, destination)? {
            return Err(ChessError::InvalidMove("the king is under attack".to_owned()));
        }

        self.undo_stack.push(Memento::capture(&self.state)?);
        self.state.history.push(self.state.board.clone());

        let board = &mut self.state.board;
        let captured = board.move_piece(origin, destination);
        board.side_to_move = piece.color.opposite();

        if piece.kind != PieceKind::Pawn {
            board.en_passant_square = None;
        }

        if captured.is_none() && piece.kind != PieceKind::Pawn {
            board.halfmove_clock = board.halfmove_clock.saturating_add(1);
        } else {
            board.halfmove_clock = 0;
        }

        if piece.color == Color::Dark {
            board.fullmove_number = board.fullmove_number.saturating_add(1);
        }

        board.update_fen();
        debug!(
            "{} {:?} {}->{} committed: {}",
            piece.color,
            piece.kind,
            square_label(&origin),
            square_label(&destination),
            board.fen()
        );

        let to_move = board.side_to_move;
        if check_detector::in_check(board, to_move) {
            debug!("{to_move} is in check");
            return Err(ChessError::Check { color: to_move });
        }

        Ok(())
    }

    /// Take back the most recent move still on record. At most `UNDO_DEPTH`
    /// moves can be taken back in a row; past that this fails with
    /// `InvalidMove` and changes nothing.
    pub fn undo(&mut self) -> ChessResult<()> {
        let memento = self
            .undo_stack
            .pop()
            .inspect_err(|_| warn!("undo requested with nothing to restore"))?;

        // The memento was taken before the undone move appended to the
        // history log, so the restored log already lacks that entry.
        self.state = memento.restore()?;
        debug!("undo restored {}", self.state.board.fen());
        Ok(())
    }
}
