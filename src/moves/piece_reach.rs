//! Geometric reach of a single piece.
//!
//! Answers "can this piece travel from here to there by its movement rules",
//! ignoring whether the move exposes its own king. Castling is not included.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};

/// Destinations the piece on `origin` can reach; empty when `origin` is empty.
pub fn reachable_squares(board: &Board, origin: Square) -> u64 {
    let Some(piece) = board.piece_at(origin) else {
        return 0;
    };

    let occupancy = board.occupancy_all;
    let reach = match piece.kind {
        PieceKind::Pawn => pawn_reach(board, piece),
        PieceKind::Knight => knight_attacks(origin),
        PieceKind::Bishop => bishop_attacks(origin, occupancy),
        PieceKind::Rook => rook_attacks(origin, occupancy),
        PieceKind::Queen => queen_attacks(origin, occupancy),
        PieceKind::King => king_attacks(origin),
    };

    reach & !board.occupancy_by_color[piece.color.index()]
}

#[inline]
pub fn is_geometrically_legal(board: &Board, origin: Square, destination: Square) -> bool {
    is_valid_square(destination) && reachable_squares(board, origin) & square_mask(destination) != 0
}

/// Every `(origin, destination)` the side to move can reach geometrically.
pub fn pseudo_legal_moves(board: &Board) -> Vec<(Square, Square)> {
    let own = board.occupancy_by_color[board.side_to_move.index()];
    squares_of(own)
        .flat_map(|origin| {
            squares_of(reachable_squares(board, origin)).map(move |destination| (origin, destination))
        })
        .collect()
}

fn pawn_reach(board: &Board, pawn: Piece) -> u64 {
    let enemies = board.occupancy_by_color[pawn.color.opposite().index()];
    let en_passant = board.en_passant_square.map_or(0, square_mask);
    let mut reach = pawn_attacks(pawn.color, pawn.square) & (enemies | en_passant);

    let (step, start_rank): (i16, u8) = match pawn.color {
        Color::Light => (8, 1),
        Color::Dark => (-8, 6),
    };
    let empty = !board.occupancy_all;

    let one_step = i16::from(pawn.square) + step;
    if (0..64).contains(&one_step) && empty & square_mask(one_step as Square) != 0 {
        reach |= square_mask(one_step as Square);

        let two_step = (one_step + step) as Square;
        if pawn.square / 8 == start_rank && empty & square_mask(two_step) != 0 {
            reach |= square_mask(two_step);
        }
    }

    reach
}
