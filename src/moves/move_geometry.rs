//! Shared geometric helpers for the per-piece move predicates.
//!
//! Every rule in this crate is phrased in terms of absolute row/column deltas
//! and unit step directions between two squares; sliding pieces additionally
//! require an unobstructed path. Those pieces of arithmetic live here so the
//! per-piece modules stay single-purpose.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Absolute `(row, col)` distance between two squares.
#[inline]
pub fn absolute_deltas(from: &BoardLocation, to: &BoardLocation) -> (i8, i8) {
    ((to.0 - from.0).abs(), (to.1 - from.1).abs())
}

/// Unit step `(row, col)` direction from `from` toward `to`; each component
/// is -1, 0, or 1.
#[inline]
pub fn step_directions(from: &BoardLocation, to: &BoardLocation) -> (i8, i8) {
    ((to.0 - from.0).signum(), (to.1 - from.1).signum())
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks one unit step at a time along the direction from `from` to `to`,
/// excluding both endpoints. Only meaningful for straight or diagonal pairs;
/// callers establish the pattern before asking.
pub fn path_is_clear(board: &Board, from: &BoardLocation, to: &BoardLocation) -> bool {
    let (row_dir, col_dir) = step_directions(from, to);
    let mut cursor = (from.0 + row_dir, from.1 + col_dir);
    while cursor != *to {
        if board.view(&cursor).is_some() {
            return false;
        }
        cursor = (cursor.0 + row_dir, cursor.1 + col_dir);
    }
    true
}
