//! Selection-driven interaction controller.
//!
//! The UI layer reports square clicks; this controller owns the `GameState`
//! plus the transient selection (selected square and highlighted targets)
//! and mediates selection, deselection, and move commits. It never returns
//! an error and never panics: every click resolves to a `SelectionOutcome`,
//! with illegal actions absorbed as explained no-ops.

use crate::game_state::chess_types::{location_in_bounds, BoardLocation, Color};
use crate::game_state::game_state::{GameState, GameStatus, MoveRecord};
use crate::move_generation::legal_move_generator::legal_moves;

/// Why a click changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedReason {
    /// The game has already been won; only `reset` acts.
    GameOver,
    /// The click landed outside the board.
    OutOfBounds,
    /// No selection was active and the square holds no piece of the side to
    /// move.
    NotYourPiece,
    /// A selection was active but the square is not a legal destination;
    /// the selection was cleared.
    IllegalDestination,
}

/// Result of feeding one click to `select_square`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now selected; `targets` are its legal
    /// destinations, for highlighting.
    Selected {
        from: BoardLocation,
        targets: Vec<BoardLocation>,
    },
    /// The active selection was cleared by re-clicking it.
    Deselected,
    /// A move was committed and the turn flipped.
    Moved(MoveRecord),
    /// The click changed nothing; the reason says why.
    Ignored(RejectedReason),
}

/// Owns a game plus the transient selection state driving highlights.
///
/// Selection state is kept out of `GameState` so the move history stays a
/// clean, replayable record of the game itself.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    game: GameState,
    selected: Option<BoardLocation>,
    targets: Vec<BoardLocation>,
}

impl SelectionController {
    /// Controller over a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new_game(),
            selected: None,
            targets: Vec::new(),
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn selected_square(&self) -> Option<BoardLocation> {
        self.selected
    }

    /// Legal destinations of the current selection, for highlighting.
    #[inline]
    pub fn highlighted_targets(&self) -> &[BoardLocation] {
        &self.targets
    }

    /// Feed one square click to the state machine.
    ///
    /// Transitions:
    /// - nothing selected + own piece clicked: select it;
    /// - selected square clicked again: deselect;
    /// - highlighted target clicked: commit the move;
    /// - another own piece clicked: move the selection there;
    /// - anything else: clear the selection as a no-op.
    pub fn select_square(&mut self, pos: &BoardLocation) -> SelectionOutcome {
        if matches!(self.game.status, GameStatus::Won(_)) {
            return SelectionOutcome::Ignored(RejectedReason::GameOver);
        }
        if !location_in_bounds(pos) {
            return SelectionOutcome::Ignored(RejectedReason::OutOfBounds);
        }

        match self.selected {
            None => self.try_select(pos),
            Some(current) if current == *pos => {
                self.clear_selection();
                SelectionOutcome::Deselected
            }
            Some(current) => {
                if self.targets.contains(pos) {
                    return self.commit(&current, pos);
                }
                // Clicking another own piece re-selects; everything else
                // clears the selection without error.
                let clicked_own = self
                    .game
                    .board
                    .piece_at(pos)
                    .ok()
                    .flatten()
                    .is_some_and(|piece| piece.is_own(self.game.turn));
                self.clear_selection();
                if clicked_own {
                    self.try_select(pos)
                } else {
                    SelectionOutcome::Ignored(RejectedReason::IllegalDestination)
                }
            }
        }
    }

    /// Unconditionally return to the initial state, from any state.
    pub fn reset(&mut self) {
        self.game.reset();
        self.clear_selection();
    }

    /// Winner, if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        match self.game.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::Active => None,
        }
    }

    fn try_select(&mut self, pos: &BoardLocation) -> SelectionOutcome {
        let clicked = self.game.board.piece_at(pos).ok().flatten();
        match clicked {
            Some(piece) if piece.is_own(self.game.turn) => {
                let targets = legal_moves(&self.game.board, pos);
                self.selected = Some(*pos);
                self.targets = targets.clone();
                SelectionOutcome::Selected {
                    from: *pos,
                    targets,
                }
            }
            _ => SelectionOutcome::Ignored(RejectedReason::NotYourPiece),
        }
    }

    fn commit(&mut self, from: &BoardLocation, to: &BoardLocation) -> SelectionOutcome {
        // Destinations come from the legal set, so commit cannot fail; the
        // fallback keeps the no-panic guarantee regardless.
        match self.game.commit_move(from, to) {
            Ok(record) => {
                self.clear_selection();
                SelectionOutcome::Moved(record)
            }
            Err(_) => {
                self.clear_selection();
                SelectionOutcome::Ignored(RejectedReason::IllegalDestination)
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }
}
