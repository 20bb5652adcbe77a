//! Knight movement rules: the (1, 2) L-shape, jumping over anything.

use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_geometry::absolute_deltas;

/// Decide whether a knight may move from `from` to `to`: the absolute deltas
/// are a permutation of `(1, 2)`. Intervening pieces are irrelevant.
pub fn knight_move_is_valid(from: &BoardLocation, to: &BoardLocation) -> bool {
    let (row_diff, col_diff) = absolute_deltas(from, to);
    (row_diff == 1 && col_diff == 2) || (row_diff == 2 && col_diff == 1)
}
