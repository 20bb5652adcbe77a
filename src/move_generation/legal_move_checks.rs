//! Move legality dispatch.
//!
//! `is_valid_move` is the single pure predicate behind destination
//! highlighting and move acceptance: bounds and same-side occupancy are
//! checked once here, then the piece kind selects its geometric rule.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation, Piece, PieceKind};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_move_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_move_is_valid;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

/// Decide whether `piece`, standing on `from`, may move to `to` under the
/// simplified ruleset (no castling, en passant, promotion, or check safety).
///
/// Pure predicate over the current board; rejects out-of-bounds destinations
/// and same-side captures before any per-piece geometry runs.
pub fn is_valid_move(
    board: &Board,
    from: &BoardLocation,
    to: &BoardLocation,
    piece: &Piece,
) -> bool {
    if !location_in_bounds(from) || !location_in_bounds(to) {
        return false;
    }
    if let Some(occupant) = board.view(to) {
        if occupant.is_own(piece.color) {
            return false;
        }
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move_is_valid(board, from, to, piece.color),
        PieceKind::Knight => knight_move_is_valid(from, to),
        PieceKind::Bishop => bishop_move_is_valid(board, from, to),
        PieceKind::Rook => rook_move_is_valid(board, from, to),
        PieceKind::Queen => queen_move_is_valid(board, from, to),
        PieceKind::King => king_move_is_valid(from, to),
    }
}
