//! Core piece and coordinate types shared by every subsystem.
//!
//! Board coordinates are `(row, col)` pairs where row 0 is Black's home rank
//! and row 7 is White's home rank, matching the orientation the rendering
//! layer uses. Pieces are a `(kind, color)` pair representable as one of the
//! 12 FEN symbols.

use crate::errors::ChessErrors;

/// A `(row, col)` board coordinate. Valid squares have both members in `0..=7`.
pub type BoardLocation = (i8, i8);

/// Offsets a board location by `(d_row, d_col)`, failing with `OutOfBounds`
/// when the result leaves the grid. Move rules use this to step from a known
/// square toward a candidate one.
pub fn move_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if location_in_bounds(&y) {
        Ok(y)
    } else {
        Err(ChessErrors::OutOfBounds)
    }
}

/// True when both coordinates fall inside the 8x8 grid.
#[inline]
pub fn location_in_bounds(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row increment of a forward pawn step. White advances toward row 0,
    /// Black toward row 7.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Represents a chess piece with its kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// True when this piece belongs to `side`.
    #[inline]
    pub const fn is_own(&self, side: Color) -> bool {
        matches!(
            (self.color, side),
            (Color::White, Color::White) | (Color::Black, Color::Black)
        )
    }

    /// True when this piece belongs to the opponent of `side`.
    #[inline]
    pub const fn is_opponent(&self, side: Color) -> bool {
        !self.is_own(side)
    }

    /// FEN symbol for this piece: uppercase for White, lowercase for Black.
    pub const fn symbol(&self) -> char {
        let upper = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }

    /// Parse one of the 12 FEN piece symbols.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match symbol.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some(Self { kind, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_board_location_rejects_out_of_bounds() {
        assert_eq!(
            move_board_location(&(0, 0), -1, 0),
            Err(ChessErrors::OutOfBounds)
        );
        assert_eq!(
            move_board_location(&(7, 7), 0, 1),
            Err(ChessErrors::OutOfBounds)
        );
        assert_eq!(move_board_location(&(3, 3), 2, -1), Ok((5, 2)));
    }

    #[test]
    fn symbol_round_trip_for_all_twelve_pieces() {
        for symbol in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_symbol(symbol).unwrap();
            assert_eq!(piece.symbol(), symbol);
        }
        assert!(Piece::from_symbol('x').is_none());
        assert!(Piece::from_symbol('1').is_none());
    }

    #[test]
    fn ownership_predicates() {
        let white_rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(white_rook.is_own(Color::White));
        assert!(!white_rook.is_own(Color::Black));
        assert!(white_rook.is_opponent(Color::Black));
    }
}
