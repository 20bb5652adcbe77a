//! Algebraic coordinate conversions.
//!
//! Converts between human-readable square names (e.g. `e4`) and the `(row,
//! col)` locations used internally, reused by the move log and the terminal
//! front-end. Rank 8 (the top of the rendered board) is row 0.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{location_in_bounds, BoardLocation};

/// Convert an algebraic square name (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok((row, col))
}

/// Convert a board location to an algebraic square name (for example: "e4").
pub fn location_to_algebraic(loc: &BoardLocation) -> Result<String, ChessErrors> {
    if !location_in_bounds(loc) {
        return Err(ChessErrors::OutOfBounds);
    }
    let file = char::from(b'a' + loc.1 as u8);
    let rank = char::from(b'1' + (7 - loc.0) as u8);
    Ok(format!("{file}{rank}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_squares() {
        assert_eq!(algebraic_to_location("a8").unwrap(), (0, 0));
        assert_eq!(algebraic_to_location("h1").unwrap(), (7, 7));
        assert_eq!(algebraic_to_location("e2").unwrap(), (6, 4));
        assert_eq!(algebraic_to_location("E4").unwrap(), (4, 4));
    }

    #[test]
    fn round_trip_all_squares() {
        for row in 0..8 {
            for col in 0..8 {
                let name = location_to_algebraic(&(row, col)).unwrap();
                assert_eq!(algebraic_to_location(&name).unwrap(), (row, col));
            }
        }
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "e44", "i4", "a0", "a9", "44"] {
            assert!(
                algebraic_to_location(bad).is_err(),
                "expected rejection: {bad:?}"
            );
        }
        assert!(location_to_algebraic(&(8, 0)).is_err());
        assert!(location_to_algebraic(&(0, -1)).is_err());
    }
}
