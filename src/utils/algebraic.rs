//! Conversions between algebraic coordinates (`"e4"`) and square indices.

use crate::game_state::chess_types::{is_valid_square, Square};
use crate::rules::errors::{ChessError, ChessResult};

/// Parse a coordinate such as `"e4"` into a square index.
pub fn parse_square(text: &str) -> ChessResult<Square> {
    let &[file, rank] = text.as_bytes() else {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Render a square index as a coordinate such as `"e4"`.
pub fn square_name(square: Square) -> ChessResult<String> {
    if !is_valid_square(square) {
        return Err(ChessError::InvalidSquare(square.to_string()));
    }

    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'1' + square / 8);
    Ok(format!("{file}{rank}"))
}

/// Human label used in error messages; falls back to the raw index.
pub fn square_label(square: &Square) -> String {
    square_name(*square).unwrap_or_else(|_| format!("#{square}"))
}
