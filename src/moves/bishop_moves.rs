//! Bishop movement rules: diagonals with an unobstructed path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_geometry::{absolute_deltas, path_is_clear};

/// Decide whether a bishop may move from `from` to `to`: equal nonzero
/// row/column deltas and every square strictly between is empty.
pub fn bishop_move_is_valid(board: &Board, from: &BoardLocation, to: &BoardLocation) -> bool {
    let (row_diff, col_diff) = absolute_deltas(from, to);
    if row_diff != col_diff || row_diff == 0 {
        return false;
    }
    path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen::parse_fen;

    #[test]
    fn moves_along_diagonals_only() {
        let board = Board::empty();
        assert!(bishop_move_is_valid(&board, &(7, 2), &(2, 7)));
        assert!(bishop_move_is_valid(&board, &(7, 2), &(5, 0)));
        assert!(!bishop_move_is_valid(&board, &(7, 2), &(7, 5)));
        assert!(!bishop_move_is_valid(&board, &(7, 2), &(7, 2)));
    }

    #[test]
    fn blocked_diagonal() {
        // Bishop on c1 behind its own d2 pawn.
        let (board, _) = parse_fen("4k3/8/8/8/8/8/3P4/2B1K3 w").unwrap();
        assert!(!bishop_move_is_valid(&board, &(7, 2), &(4, 5)));
        assert!(bishop_move_is_valid(&board, &(7, 2), &(6, 1)));
    }
}
