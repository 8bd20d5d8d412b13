//! Game state and the move-application rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Mark};

/// Complete game state: the board plus the turn indicator.
///
/// This is the sole mutator of board contents. Each cell is written at
/// most once, the turn indicator alternates across accepted moves, and
/// the board freezes as soon as a winner exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_mark: Mark,
}

impl GameState {
    /// Creates a new game with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark the next accepted move will place.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the winning mark, if any line is held.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.board)
    }

    /// Applies a move at the given position.
    ///
    /// Rejected moves are silent no-ops: nothing changes when the cell is
    /// already occupied or when a winner already exists. There is no error
    /// to surface; a rejection is observable only as the board not
    /// changing. On acceptance the cell takes the current mark and the
    /// turn flips.
    #[instrument(skip(self), fields(pos = %pos, mark = %self.next_mark))]
    pub fn apply(&mut self, pos: Position) {
        if self.winner().is_some() {
            debug!("move ignored: game already decided");
            return;
        }
        if !self.board.is_empty(pos) {
            debug!("move ignored: cell occupied");
            return;
        }

        self.board.set(pos, Cell::Occupied(self.next_mark));
        self.next_mark = self.next_mark.opponent();
        debug!("move accepted");
    }

    /// Derived status line, never stored.
    ///
    /// Reports `Winner: <mark>` once a line is held, otherwise
    /// `Next player: <mark>`. A full board without a winner still reports
    /// the next player; there is no draw status.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(mark) => format!("Winner: {mark}"),
            None => format!("Next player: {}", self.next_mark),
        }
    }

    /// Starts over with an empty board.
    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
