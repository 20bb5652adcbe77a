//! King movement rules: one step in any direction.
//!
//! There is no check-safety validation in this ruleset; a king may step onto
//! an attacked square, and the game ends when a king is captured.

use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_geometry::absolute_deltas;

/// Decide whether a king may move from `from` to `to`: both absolute deltas
/// at most one, and the move is not zero-length.
pub fn king_move_is_valid(from: &BoardLocation, to: &BoardLocation) -> bool {
    let (row_diff, col_diff) = absolute_deltas(from, to);
    row_diff <= 1 && col_diff <= 1 && (row_diff, col_diff) != (0, 0)
}
