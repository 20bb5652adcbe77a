//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by the board
//! accessors and parsing utilities. The enum `ChessErrors` is used as the
//! single error type across the crate to simplify propagation and matching.
//!
//! Usage guidelines:
//! - Board accessors return `OutOfBounds` for coordinates outside the grid.
//!   That variant marks a violated calling contract, not a user-facing
//!   condition; correct callers bound-check (or enumerate) first and treat it
//!   as unreachable.
//! - Parsing variants (`InvalidFenString`, `InvalidAlgebraicString`) are
//!   recoverable and suitable for presenting to end users.
//! - Illegal chess moves are NOT errors anywhere in this crate: the selection
//!   controller absorbs them as no-ops, and the legality evaluator is a plain
//!   boolean predicate.

use std::fmt;

use crate::game_state::chess_types::BoardLocation;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFenString(String),
    /// The provided algebraic square name is invalid or could not be parsed.
    InvalidAlgebraicString(String),
    /// Attempted to commit a move whose origin square holds no piece.
    TryingToMoveNonExistentPiece(BoardLocation),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds => write!(f, "board location out of bounds"),
            ChessErrors::InvalidFenString(detail) => {
                write!(f, "invalid FEN string: {detail}")
            }
            ChessErrors::InvalidAlgebraicString(detail) => {
                write!(f, "invalid algebraic square: {detail}")
            }
            ChessErrors::TryingToMoveNonExistentPiece(loc) => {
                write!(f, "no piece to move at ({}, {})", loc.0, loc.1)
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
