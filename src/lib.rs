//! Crate root module declarations for the Breakroom Chess engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece move
//! rules, legality checks and enumeration, the selection controller, engines,
//! and utility helpers) so the binary, tests, and external tooling can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_geometry;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod interaction {
    pub mod selection;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen;
    pub mod game_log;
    pub mod render_game_state;
}
