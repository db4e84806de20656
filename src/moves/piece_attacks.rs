//! Attack bitboards for every piece kind.
//!
//! Leaper attacks (knight, king, pawn captures) are precomputed at compile
//! time; slider attacks walk rays against the supplied occupancy and include
//! the first blocker on each ray.

use crate::game_state::chess_types::{Color, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const KNIGHT_ATTACKS: [u64; 64] = leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = leaper_table(&KING_OFFSETS);
pub const LIGHT_PAWN_ATTACKS: [u64; 64] = leaper_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [u64; 64] = leaper_table(&[(-1, -1), (1, -1)]);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Squares a pawn of `color` on `square` captures on.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &DIAGONALS, occupancy)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &ORTHOGONALS, occupancy)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

const fn leaper_table(offsets: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let target_file = file + offsets[i].0;
            let target_rank = rank + offsets[i].1;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                attacks |= 1u64 << (target_rank * 8 + target_file);
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

fn slide(square: Square, directions: &[(i32, i32)], occupancy: u64) -> u64 {
    let origin_file = (square % 8) as i32;
    let origin_rank = (square / 8) as i32;

    directions
        .iter()
        .fold(0u64, |mut attacks, &(file_step, rank_step)| {
            let mut file = origin_file + file_step;
            let mut rank = origin_rank + rank_step;

            while (0..8).contains(&file) && (0..8).contains(&rank) {
                let bit = 1u64 << (rank * 8 + file);
                attacks |= bit;
                if occupancy & bit != 0 {
                    break;
                }
                file += file_step;
                rank += rank_step;
            }

            attacks
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A1: Square = 0;
    const E2: Square = 12;
    const D4: Square = 27;
    const E7: Square = 52;

    #[test]
    fn leaper_counts_match_board_geometry() {
        assert_eq!(knight_attacks(D4).count_ones(), 8);
        assert_eq!(knight_attacks(A1).count_ones(), 2);
        assert_eq!(king_attacks(A1).count_ones(), 3);
        assert_eq!(king_attacks(D4).count_ones(), 8);
    }

    #[test]
    fn pawn_attacks_point_forward_for_each_color() {
        assert_eq!(pawn_attacks(Color::Light, E2), (1u64 << 19) | (1u64 << 21));
        assert_eq!(pawn_attacks(Color::Dark, E7), (1u64 << 43) | (1u64 << 45));
        assert_eq!(pawn_attacks(Color::Light, 60), 0);
    }

    #[test]
    fn open_board_slider_counts() {
        assert_eq!(rook_attacks(D4, 0).count_ones(), 14);
        assert_eq!(bishop_attacks(D4, 0).count_ones(), 13);
        assert_eq!(queen_attacks(D4, 0).count_ones(), 27);
    }

    #[test]
    fn blockers_are_included_and_stop_the_ray() {
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(A1, blocker_on_a4);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);

        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(2, blocker_on_e3);
        assert_ne!(attacks & blocker_on_e3, 0);
        assert_eq!(attacks & (1u64 << 29), 0);
    }
}
