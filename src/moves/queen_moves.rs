//! Queen movement rules: the union of rook and bishop patterns.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

/// Decide whether a queen may move from `from` to `to`: legal iff the move
/// satisfies either the rook or the bishop pattern, path-clear included.
pub fn queen_move_is_valid(board: &Board, from: &BoardLocation, to: &BoardLocation) -> bool {
    rook_move_is_valid(board, from, to) || bishop_move_is_valid(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen::parse_fen;

    #[test]
    fn combines_rook_and_bishop_patterns() {
        let board = Board::empty();
        assert!(queen_move_is_valid(&board, &(4, 4), &(4, 0)));
        assert!(queen_move_is_valid(&board, &(4, 4), &(0, 0)));
        assert!(queen_move_is_valid(&board, &(4, 4), &(7, 7)));
        assert!(!queen_move_is_valid(&board, &(4, 4), &(2, 5)));
    }

    #[test]
    fn respects_obstructions_on_both_patterns() {
        // Queen on d1 hemmed in by the opening pawn wall and pieces.
        let board = Board::starting_layout();
        assert!(!queen_move_is_valid(&board, &(7, 3), &(5, 3)));
        assert!(!queen_move_is_valid(&board, &(7, 3), &(4, 0)));

        let (open, _) = parse_fen("4k3/8/8/8/8/8/8/3QK3 w").unwrap();
        assert!(queen_move_is_valid(&open, &(7, 3), &(3, 3)));
        assert!(queen_move_is_valid(&open, &(7, 3), &(4, 0)));
    }
}
