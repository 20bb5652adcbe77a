//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the mailbox grid for the
//! terminal front-end, tests, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Render the board to a string for terminal output.
///
/// Row 0 (rank 8, Black's home) is printed at the top, matching the
/// orientation a White player expects. Squares in `highlights` are marked
/// with `*`, which is how the front-end shows legal destinations.
pub fn render_board(board: &Board, highlights: &[BoardLocation]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8i8 {
            let cell = match board.view(&(row, col)) {
                Some(piece) => piece.symbol(),
                None if highlights.contains(&(row, col)) => '*',
                None => '.',
            };
            out.push(cell);
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
