//! FEN-to-Board parser.
//!
//! Builds a fully populated board (placement, rights, en-passant target and
//! clocks) from a Forsyth-Edwards Notation string. The canonical FEN text is
//! left for `Board::from_fen` to fill in.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::rules::errors::{ChessError, ChessResult};
use crate::utils::algebraic::parse_square;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    parse_fields(fen).map_err(ChessError::InvalidFen)
}

fn parse_fields(fen: &str) -> Result<Board, String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(format!("expected 6 fields, found {}", fields.len()));
    };

    let mut board = Board::new_empty();

    parse_placement(placement, &mut board)?;
    board.side_to_move = match side {
        "w" => Color::Light,
        "b" => Color::Dark,
        _ => return Err(format!("invalid side-to-move field: {side}")),
    };
    board.castling_rights = parse_castling_rights(castling)?;
    board.en_passant_square = match en_passant {
        "-" => None,
        square => {
            let target = parse_square(square)
                .ok()
                .filter(|target| matches!(target / 8, 2 | 5))
                .ok_or_else(|| format!("invalid en-passant square: {square}"))?;
            Some(target)
        }
    };
    board.halfmove_clock = halfmove
        .parse::<u16>()
        .map_err(|_| format!("invalid halfmove clock: {halfmove}"))?;
    board.fullmove_number = fullmove
        .parse::<u16>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("invalid fullmove number: {fullmove}"))?;

    Ok(board)
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first.
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                file += run as u8;
                if file > 8 {
                    return Err(format!("rank {} has too many files", rank + 1));
                }
                continue;
            }

            let kind = PieceKind::from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };

            if file >= 8 {
                return Err(format!("rank {} has too many files", rank + 1));
            }
            board.put_piece(color, kind, rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank {} does not sum to 8 files", rank + 1));
        }
    }

    Ok(())
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, String> {
    if castling == "-" {
        return Ok(0);
    }

    castling.chars().try_fold(0, |rights, ch| {
        let flag = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(format!("invalid castling rights character: {ch}")),
        };
        Ok(rights | flag)
    })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::rules::errors::ChessError;

    #[test]
    fn parse_starting_fen() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(board.side_to_move, Color::Light);
        assert_eq!(board.fullmove_number, 1);
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.en_passant_square, None);
        assert_eq!(board.castling_rights, 0b1111);
        assert_eq!(board.occupancy_by_color[Color::Light.index()].count_ones(), 16);
        assert_eq!(board.occupancy_by_color[Color::Dark.index()].count_ones(), 16);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let cases = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ];

        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn long_digit_runs_are_rejected() {
        let fen = format!("{}/8/8/8/8/8/8/8 w - - 0 1", "8".repeat(40));
        assert!(matches!(parse_fen(&fen), Err(ChessError::InvalidFen(_))));

        let fen = "44p/8/8/8/8/8/8/8 w - - 0 1";
        assert!(matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))));
    }

    #[test]
    fn en_passant_target_must_sit_on_third_or_sixth_rank() {
        for fen in [
            "7k/8/8/8/8/8/1P6/7K w - a1 0 1",
            "7k/1p6/8/8/8/8/8/7K b - a8 0 1",
            "7k/8/8/8/8/8/8/7K w - e4 0 1",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }

        let board = parse_fen("7k/8/8/8/8/8/8/7K b - c3 0 1").expect("c3 target should parse");
        assert_eq!(board.en_passant_square, Some(18));
        let board = parse_fen("7k/8/8/8/8/8/8/7K w - f6 0 1").expect("f6 target should parse");
        assert_eq!(board.en_passant_square, Some(45));
    }
}
