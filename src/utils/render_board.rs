//! Plain-text board dump for terminals and test diagnostics.

use crate::game_state::board::Board;

/// Render the board with rank 8 at the top, `.` for empty squares.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let rank_char = char::from(b'1' + rank);
        out.push(rank_char);

        for file in 0..8u8 {
            out.push(' ');
            out.push(board.piece_at(rank * 8 + file).map_or('.', |piece| piece.fen_char()));
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(board.fen());
    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn starting_board_renders_back_ranks() {
        let text = render_board(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "4 . . . . . . . . 4");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[10], Board::new_game().fen());
    }
}
