//! PGN-style move log writer.
//!
//! Serializes a game's move history to PGN-shaped text: a header block
//! followed by numbered long-algebraic movetext and a result tag. The
//! simplified ruleset has no SAN ambiguity to resolve, so moves are written
//! as origin-destination pairs (e.g. `e2e4`).

use std::collections::BTreeMap;

use chrono::Local;

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::utils::algebraic::location_to_algebraic;

/// Write the game's history as PGN-style text with default headers.
///
/// The `Date` header is stamped with the local date; the result tag follows
/// the game status (`1-0`, `0-1`, or `*` for a game still in progress).
pub fn write_game_log(game: &GameState) -> Result<String, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Breakroom Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_tag(game.status).to_owned());

    write_game_log_with_headers(game, &headers)
}

/// Write the game's history as PGN-style text with caller-supplied headers.
pub fn write_game_log_with_headers(
    game: &GameState,
    headers: &BTreeMap<String, String>,
) -> Result<String, ChessErrors> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(game.history.len() + 1);
    for (ply, record) in game.history.iter().enumerate() {
        let lan = format!(
            "{}{}",
            location_to_algebraic(&record.from)?,
            location_to_algebraic(&record.to)?
        );
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(String::as_str)
        .unwrap_or_else(|| result_tag(game.status));
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

/// PGN result tag for a game status.
pub fn result_tag(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won(Color::White) => "1-0",
        GameStatus::Won(Color::Black) => "0-1",
        GameStatus::Active => "*",
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
