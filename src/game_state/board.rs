//! 8x8 mailbox board representation.
//!
//! `Board` stores one `Option<Piece>` per square and provides the mechanical
//! accessors the rules logic is built on. Nothing here validates chess
//! legality; `clone_with_move` relocates pieces blindly so the legality
//! evaluator stays independently testable.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{
    location_in_bounds, BoardLocation, Color, Piece, PieceKind,
};

/// Back-rank piece order shared by both home rows, queenside to kingside.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of cells, each empty or holding one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board with no pieces placed.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard opening arrangement: Black's pieces on rows 0-1, White's
    /// on rows 6-7.
    pub fn starting_layout() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// Returns the piece at `loc`, or `None` for an empty square.
    ///
    /// # Returns
    ///
    /// * `Err(ChessErrors::OutOfBounds)` when `loc` falls outside the grid.
    ///   Correct callers bound-check first; this is a contract violation.
    pub fn piece_at(&self, loc: &BoardLocation) -> Result<Option<Piece>, ChessErrors> {
        if !location_in_bounds(loc) {
            return Err(ChessErrors::OutOfBounds);
        }
        Ok(self.cells[loc.0 as usize][loc.1 as usize])
    }

    /// In-bounds convenience view used by the move rules, which only probe
    /// squares already known to be on the board.
    #[inline]
    pub(crate) fn view(&self, loc: &BoardLocation) -> Option<Piece> {
        self.cells[loc.0 as usize][loc.1 as usize]
    }

    /// Places (or clears) a square directly. Test and FEN setup only.
    pub fn set_piece(
        &mut self,
        loc: &BoardLocation,
        piece: Option<Piece>,
    ) -> Result<(), ChessErrors> {
        if !location_in_bounds(loc) {
            return Err(ChessErrors::OutOfBounds);
        }
        self.cells[loc.0 as usize][loc.1 as usize] = piece;
        Ok(())
    }

    /// Returns a new board with the piece at `from` relocated to `to`, the
    /// origin cleared, and any previous occupant of `to` discarded.
    ///
    /// Performs no legality validation; that is the evaluator's job.
    pub fn clone_with_move(
        &self,
        from: &BoardLocation,
        to: &BoardLocation,
    ) -> Result<Board, ChessErrors> {
        let moved = self.piece_at(from)?;
        if !location_in_bounds(to) {
            return Err(ChessErrors::OutOfBounds);
        }
        let mut next = self.clone();
        next.cells[from.0 as usize][from.1 as usize] = None;
        next.cells[to.0 as usize][to.1 as usize] = moved;
        Ok(next)
    }

    /// Iterate over all occupied squares as `(location, piece)` pairs, row 0
    /// first.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }
}
