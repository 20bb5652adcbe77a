//! Rook movement rules: straight lines with an unobstructed path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_geometry::{absolute_deltas, path_is_clear};

/// Decide whether a rook may move from `from` to `to`: exactly one of the
/// row/column deltas is zero and every square strictly between is empty.
pub fn rook_move_is_valid(board: &Board, from: &BoardLocation, to: &BoardLocation) -> bool {
    let (row_diff, col_diff) = absolute_deltas(from, to);
    if (row_diff == 0) == (col_diff == 0) {
        // Not a straight line (also rejects the zero-length move).
        return false;
    }
    path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen::parse_fen;

    #[test]
    fn moves_along_ranks_and_files_only() {
        let board = Board::empty();
        assert!(rook_move_is_valid(&board, &(7, 0), &(7, 4)));
        assert!(rook_move_is_valid(&board, &(7, 0), &(0, 0)));
        assert!(!rook_move_is_valid(&board, &(7, 0), &(5, 2)));
        assert!(!rook_move_is_valid(&board, &(7, 0), &(7, 0)));
    }

    #[test]
    fn blocked_rank_until_cleared() {
        // Rook on a1 with its own knight still on b1.
        let (board, _) = parse_fen("4k3/8/8/8/8/8/8/RN2K3 w").unwrap();
        assert!(!rook_move_is_valid(&board, &(7, 0), &(7, 4)));

        let (cleared, _) = parse_fen("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        assert!(rook_move_is_valid(&cleared, &(7, 0), &(7, 3)));
    }
}
