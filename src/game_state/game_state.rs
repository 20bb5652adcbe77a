//! Core game state: board, turn, history, and status.
//!
//! `GameState` is the replayable model of a game in progress. Committing a
//! move snapshots the board via `clone_with_move`, appends an immutable
//! `MoveRecord`, flips the turn, and checks the simplified terminal
//! condition: capturing a king ends the game. Transient selection state is
//! deliberately kept out of this type, in the selection controller.

use crate::errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

/// Whether the game is still in progress or has been won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won(Color),
}

/// One committed move, including any capture, as appended to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub side: Color,
}

/// Full replayable game model.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub history: Vec<MoveRecord>,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Fresh game: standard opening layout, White to move, empty history.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_layout(),
            turn: Color::White,
            history: Vec::new(),
            status: GameStatus::Active,
        }
    }

    /// Unconditionally restore the initial state.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Apply a move that the caller has already validated against the legal
    /// destination set: update the board, record the move, flip the turn,
    /// and mark the game won if a king was captured.
    ///
    /// # Returns
    ///
    /// * `Ok(MoveRecord)` - The record appended to the history.
    /// * `Err(ChessErrors)` - `OutOfBounds` for an endpoint outside the grid
    ///   or `TryingToMoveNonExistentPiece` for an empty origin; both are
    ///   unreachable when destinations come from `legal_moves`.
    pub fn commit_move(
        &mut self,
        from: &BoardLocation,
        to: &BoardLocation,
    ) -> Result<MoveRecord, ChessErrors> {
        let piece = self
            .board
            .piece_at(from)?
            .ok_or(ChessErrors::TryingToMoveNonExistentPiece(*from))?;
        let captured = self.board.piece_at(to)?;

        self.board = self.board.clone_with_move(from, to)?;

        let record = MoveRecord {
            from: *from,
            to: *to,
            piece,
            captured,
            side: self.turn,
        };
        self.history.push(record);

        if matches!(captured, Some(target) if target.kind == PieceKind::King) {
            self.status = GameStatus::Won(self.turn);
        }
        self.turn = self.turn.opposite();

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_the_standard_opening() {
        let game = GameState::new_game();
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.status, GameStatus::Active);
        assert!(game.history.is_empty());
        assert_eq!(game.board, Board::starting_layout());
    }

    #[test]
    fn commit_flips_turn_and_appends_history() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let record = game.commit_move(&(6, 4), &(4, 4))?;
        assert_eq!(game.turn, Color::Black);
        assert_eq!(game.history.len(), 1);
        assert_eq!(record.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(record.captured, None);
        assert_eq!(record.side, Color::White);

        game.commit_move(&(1, 4), &(3, 4))?;
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.history.len(), 2);
        Ok(())
    }

    #[test]
    fn capturing_the_king_wins_the_game() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        // Teleport the white queen next to the black king; commit_move does
        // not re-validate legality, which keeps this setup short.
        let record = game.commit_move(&(7, 3), &(0, 4))?;
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(game.status, GameStatus::Won(Color::White));
        Ok(())
    }

    #[test]
    fn reset_restores_the_initial_state() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        game.commit_move(&(6, 4), &(4, 4))?;
        game.commit_move(&(1, 4), &(3, 4))?;
        game.reset();
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.status, GameStatus::Active);
        assert!(game.history.is_empty());
        assert_eq!(game.board, Board::starting_layout());
        Ok(())
    }

    #[test]
    fn commit_rejects_empty_origin() {
        let mut game = GameState::new_game();
        assert!(game.commit_move(&(4, 4), &(3, 4)).is_err());
    }
}
