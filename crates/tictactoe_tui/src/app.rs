//! Application state: the owned game plus the board cursor.

use crossterm::event::KeyCode;
use tictactoe::{GameState, Position};
use tracing::debug;

use crate::input;

/// Owner of all UI state. The renderer reads it, never writes it.
pub struct App {
    game: GameState,
    cursor: Position,
}

impl App {
    /// Creates a fresh game with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Routes a cell activation into the game state.
    pub fn activate(&mut self, pos: Position) {
        debug!(%pos, "cell activated");
        self.game.apply(pos);
    }

    /// Activates the cell under the cursor.
    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    /// Arrow keys move the cursor; digit keys activate a cell directly.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(pos) = input::digit_cell(key) {
            self.activate(pos);
        } else {
            self.cursor = input::move_cursor(self.cursor, key);
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}
