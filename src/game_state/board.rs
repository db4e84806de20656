//! Bitboard-backed board: piece placement, turn/state flags and clocks.
//!
//! `Board` is the square-level collaborator of the rules layer. It answers
//! lookups (`piece_at`, `king_position`, `attacked_squares`), relocates pieces
//! without judging legality, and keeps a canonical FEN string that callers
//! refresh with `update_fen` after mutating it.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::piece_attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use crate::rules::errors::ChessResult;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, rebuilt after every placement change.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    fen: String,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            fen: String::new(),
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Parse `fen` and populate the canonical FEN text.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let mut board = parse_fen(fen)?;
        board.update_fen();
        Ok(board)
    }

    /// Canonical FEN as of the last `update_fen` call.
    #[inline]
    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn update_fen(&mut self) {
        self.fen = generate_fen(self);
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !is_valid_square(square) {
            return None;
        }

        let mask = square_mask(square);
        if self.occupancy_all & mask == 0 {
            return None;
        }

        for color in [Color::Light, Color::Dark] {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece {
                        color,
                        kind,
                        square,
                    });
                }
            }
        }

        None
    }

    /// First king of `color`; `None` on boards set up without one.
    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Square> {
        squares_of(self.pieces[color.index()][PieceKind::King.index()]).next()
    }

    /// Bitboard of every square attacked BY `color`.
    pub fn attacked_squares(&self, color: Color) -> u64 {
        let own = &self.pieces[color.index()];
        let occupancy = self.occupancy_all;
        let mut attacks = 0u64;

        for square in squares_of(own[PieceKind::Pawn.index()]) {
            attacks |= pawn_attacks(color, square);
        }
        for square in squares_of(own[PieceKind::Knight.index()]) {
            attacks |= knight_attacks(square);
        }
        for square in squares_of(own[PieceKind::Bishop.index()]) {
            attacks |= bishop_attacks(square, occupancy);
        }
        for square in squares_of(own[PieceKind::Rook.index()]) {
            attacks |= rook_attacks(square, occupancy);
        }
        for square in squares_of(own[PieceKind::Queen.index()]) {
            attacks |= queen_attacks(square, occupancy);
        }
        for square in squares_of(own[PieceKind::King.index()]) {
            attacks |= king_attacks(square);
        }

        attacks
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        is_valid_square(square) && self.attacked_squares(attacker_color) & square_mask(square) != 0
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn put_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        self.clear_square(square);
        self.pieces[color.index()][kind.index()] |= square_mask(square);
        self.recalc_occupancy();
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let removed = self.piece_at(square)?;
        self.clear_square(square);
        self.recalc_occupancy();
        Some(removed)
    }

    /// Relocate the piece on `origin` to `destination` without any legality
    /// check, returning the captured piece if one was taken.
    ///
    /// Pawn bookkeeping lives here: a double step records the skipped square
    /// as the en-passant target, any other pawn move clears it, and a pawn
    /// landing diagonally on the empty en-passant target removes the passed
    /// pawn. Castling rights drop when a king or rook leaves, or a rook is
    /// captured on, its home square. Side to move and clocks are untouched.
    pub fn move_piece(&mut self, origin: Square, destination: Square) -> Option<Piece> {
        if !is_valid_square(destination) {
            return None;
        }
        let moving = self.piece_at(origin)?;

        let mut captured = if origin == destination {
            None
        } else {
            self.piece_at(destination)
        };
        if moving.kind == PieceKind::Pawn
            && captured.is_none()
            && self.en_passant_square == Some(destination)
            && origin % 8 != destination % 8
        {
            let passed_square = match moving.color {
                Color::Light => destination.checked_sub(8),
                Color::Dark => destination.checked_add(8),
            }
            .filter(|square| is_valid_square(*square));

            if let Some(passed_square) = passed_square {
                captured = self.piece_at(passed_square);
                self.clear_square(passed_square);
            }
        }

        self.clear_square(origin);
        self.clear_square(destination);
        self.pieces[moving.color.index()][moving.kind.index()] |= square_mask(destination);
        self.recalc_occupancy();

        if moving.kind == PieceKind::Pawn {
            self.en_passant_square = if origin.abs_diff(destination) == 16 {
                Some((origin + destination) / 2)
            } else {
                None
            };
        }

        self.update_castling_rights(moving, origin, destination);

        captured
    }

    fn clear_square(&mut self, square: Square) {
        let keep = !square_mask(square);
        for side in self.pieces.iter_mut() {
            for bitboard in side.iter_mut() {
                *bitboard &= keep;
            }
        }
    }

    fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all =
            self.occupancy_by_color[Color::Light.index()] | self.occupancy_by_color[Color::Dark.index()];
    }

    fn update_castling_rights(&mut self, moving: Piece, origin: Square, destination: Square) {
        if moving.kind == PieceKind::King {
            self.castling_rights &= match moving.color {
                Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
                Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
            };
        }

        for square in [origin, destination] {
            self.castling_rights &= match square {
                0 => !CASTLE_LIGHT_QUEENSIDE,
                7 => !CASTLE_LIGHT_KINGSIDE,
                56 => !CASTLE_DARK_QUEENSIDE,
                63 => !CASTLE_DARK_KINGSIDE,
                _ => CastlingRights::MAX,
            };
        }
    }
}
