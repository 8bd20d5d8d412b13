//! Tic-tac-toe game core.
//!
//! This crate owns the game model and nothing else: a 3x3 [`Board`] of
//! [`Cell`]s, a [`GameState`] that applies moves and tracks whose turn it
//! is, and the [`winner`] rule over the eight fixed lines. It performs no
//! I/O; front ends consume the board and the derived status string and
//! route cell activations into [`GameState::apply`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.status(), "Next player: X");
//!
//! game.apply(Position::Center);
//! assert_eq!(game.status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::winner;
pub use state::GameState;
pub use types::{Board, Cell, Mark};
