//! Primitive board vocabulary: colors, piece kinds, squares and bitboards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Side-to-move letter used in FEN.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.fen_char() == ch.to_ascii_lowercase())
    }
}

/// Board square index (`0 == a1`, `7 == h1`, `63 == h8`).
pub type Square = u8;

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;

#[inline]
pub const fn is_valid_square(square: Square) -> bool {
    square < 64
}

/// One-hot bitboard for `square`; callers must pass an on-board index.
#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

/// Iterate the squares set in `bitboard`, lowest index first.
pub fn squares_of(mut bitboard: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bitboard == 0 {
            return None;
        }
        let square = bitboard.trailing_zeros() as Square;
        bitboard &= bitboard - 1;
        Some(square)
    })
}

/// A piece as seen through a board lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{squares_of, Color, Piece, PieceKind};

    #[test]
    fn color_flips_and_prints() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite(), Color::Light);
        assert_eq!(Color::Dark.to_string(), "black");
    }

    #[test]
    fn squares_of_walks_set_bits_in_order() {
        let bitboard = (1u64 << 3) | (1u64 << 17) | (1u64 << 63);
        assert_eq!(squares_of(bitboard).collect::<Vec<_>>(), vec![3, 17, 63]);
        assert_eq!(squares_of(0).count(), 0);
    }

    #[test]
    fn piece_fen_char_depends_on_color() {
        let knight = Piece {
            color: Color::Light,
            kind: PieceKind::Knight,
            square: 1,
        };
        assert_eq!(knight.fen_char(), 'N');
        assert_eq!(PieceKind::from_fen_char('q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }
}
