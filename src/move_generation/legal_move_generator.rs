//! Legal destination enumeration.
//!
//! Computes the full set of squares a selected piece may move to by running
//! the legality predicate against every board square. The selection
//! controller validates clicks against this set, so illegal moves are
//! prevented by construction rather than detected after the fact.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation};
use crate::move_generation::legal_move_checks::is_valid_move;

/// All legal destinations for the piece standing on `from`.
///
/// Returns an empty set when `from` is out of bounds or holds no piece.
pub fn legal_moves(board: &Board, from: &BoardLocation) -> Vec<BoardLocation> {
    if !location_in_bounds(from) {
        return Vec::new();
    }
    let Some(piece) = board.view(from) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = (row, col);
            if is_valid_move(board, from, &to, &piece) {
                result.push(to);
            }
        }
    }
    result
}
