//! Check detection over committed and hypothetical positions.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::rules::errors::{ChessError, ChessResult};

/// True when `color`'s king stands on a square attacked by the other side.
/// A board without a `color` king is never in check.
#[inline]
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    board.is_square_attacked(king_sq, color.opposite())
}

/// Would moving the piece on `origin` to `destination` leave its own king
/// attacked? Evaluated on a clone; `board` is never touched.
pub fn would_be_in_check(board: &Board, origin: Square, destination: Square) -> ChessResult<bool> {
    let mover = board
        .piece_at(origin)
        .ok_or(ChessError::InvalidPiece { square: origin })?
        .color;

    let mut scratch = board.clone();
    scratch.move_piece(origin, destination);
    let exposed = in_check(&scratch, mover);

    trace!("speculative {origin}->{destination} for {mover}: exposed={exposed}");
    Ok(exposed)
}
