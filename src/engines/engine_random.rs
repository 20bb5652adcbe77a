//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move and is
//! primarily used as a low-strength opponent in the terminal front-end and
//! as a state-space exerciser in tests.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, ProposedMove};
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Breakroom Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<ProposedMove> {
        if matches!(game_state.status, GameStatus::Won(_)) {
            return None;
        }

        let mut candidates = Vec::<ProposedMove>::new();
        for (from, piece) in game_state.board.iter_pieces() {
            if !piece.is_own(game_state.turn) {
                continue;
            }
            for to in legal_moves(&game_state.board, &from) {
                candidates.push(ProposedMove { from, to });
            }
        }

        let mut rng = rand::rng();
        candidates.as_slice().choose(&mut rng).copied()
    }
}
