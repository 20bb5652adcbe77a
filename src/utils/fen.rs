//! FEN board parsing and generation.
//!
//! Builds a `Board` plus side-to-move from a Forsyth-Edwards Notation string,
//! and renders one back. This engine tracks neither castling rights,
//! en-passant squares, nor clocks, so those FEN fields are accepted and
//! ignored on parse and emitted as inert placeholders on generate. Used to
//! seed positions in tests and to print state from the terminal front-end.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};

/// Parse the board layout and side-to-move fields of a FEN string.
///
/// Trailing fields (castling, en passant, clocks) may be present and are
/// ignored; the side-to-move field may be omitted, defaulting to White.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_owned()))?;
    let board = parse_board(board_part)?;

    let side = match parts.next() {
        None => Color::White,
        Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(ChessErrors::InvalidFenString(format!(
                "invalid side-to-move field: {other}"
            )))
        }
    };

    Ok((board, side))
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 (Black's home) first, which is row 0 here.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as i8;
                continue;
            }

            let piece = Piece::from_symbol(ch).ok_or_else(|| {
                ChessErrors::InvalidFenString(format!("invalid piece character '{ch}'"))
            })?;

            if col >= 8 {
                return Err(ChessErrors::InvalidFenString(
                    "board rank has too many files".to_owned(),
                ));
            }
            board.set_piece(&(row as i8, col), Some(piece))?;
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFenString(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

/// Render a board and side-to-move as a FEN string.
///
/// The untracked fields are emitted as `- - 0 1`.
pub fn generate_fen(board: &Board, side: Color) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let mut empty_run = 0u8;
        for col in 0..8i8 {
            match board.view(&(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match side {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - - 0 1");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn starting_fen_parses_to_starting_layout() {
        let (board, side) = parse_fen(STARTING_POSITION_FEN).unwrap();
        assert_eq!(board, Board::starting_layout());
        assert_eq!(side, Color::White);
    }

    #[test]
    fn starting_layout_round_trips() {
        let fen = generate_fen(&Board::starting_layout(), Color::White);
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
        let (board, side) = parse_fen(&fen).unwrap();
        assert_eq!(board, Board::starting_layout());
        assert_eq!(side, Color::White);
    }

    #[test]
    fn side_to_move_defaults_to_white_and_parses_black() {
        let (_, side) = parse_fen("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(side, Color::White);
        let (_, side) = parse_fen("8/8/8/8/8/8/8/8 b").unwrap();
        assert_eq!(side, Color::Black);
    }

    #[test]
    fn sparse_position_lands_on_expected_squares() {
        let (board, _) = parse_fen("3k4/8/8/8/8/8/4P3/3K4 w").unwrap();
        assert_eq!(
            board.piece_at(&(0, 3)).unwrap().map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(
            board.piece_at(&(6, 4)).unwrap().map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(board.iter_pieces().count(), 3);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("x7/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("pppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 q").is_err());
    }
}
