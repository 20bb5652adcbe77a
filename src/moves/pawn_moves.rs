//! Pawn movement rules.
//!
//! Pawns are the only piece whose geometry depends on occupancy: a forward
//! step requires an empty square, the double step is offered only from the
//! start row with both squares empty, and the diagonal step exists only as a
//! capture. En passant and promotion are outside this ruleset.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{move_board_location, BoardLocation, Color};

/// Decide whether a pawn of `color` may move from `from` to `to`.
///
/// Both squares must be in bounds and `to` must not hold a same-side piece;
/// the dispatcher in `legal_move_checks` establishes that before calling.
pub fn pawn_move_is_valid(
    board: &Board,
    from: &BoardLocation,
    to: &BoardLocation,
    color: Color,
) -> bool {
    let forward = color.forward_direction();
    let row_step = to.0 - from.0;
    let col_diff = (to.1 - from.1).abs();
    let destination = board.view(to);

    if col_diff == 0 {
        // Forward march: cannot capture moving forward.
        if row_step == forward {
            return destination.is_none();
        }
        if row_step == 2 * forward && from.0 == pawn_start_row(color) {
            let Ok(intermediate) = move_board_location(from, forward, 0) else {
                return false;
            };
            return board.view(&intermediate).is_none() && destination.is_none();
        }
        return false;
    }

    // Diagonal step: only forward, only one file over, only as a capture.
    if col_diff == 1 && row_step == forward {
        return matches!(destination, Some(target) if target.is_opponent(color));
    }

    false
}
