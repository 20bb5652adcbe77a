//! Engine abstraction layer.
//!
//! Defines a common interface so different move-picking strategies can be
//! selected at runtime behind a single trait, as the terminal front-end does
//! for its optional computer opponent.

use crate::game_state::chess_types::BoardLocation;
use crate::game_state::game_state::GameState;

/// A proposed move: origin and destination squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` when the game is over or
    /// no legal move exists.
    fn choose_move(&mut self, game_state: &GameState) -> Option<ProposedMove>;
}
