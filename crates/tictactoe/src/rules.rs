//! Win detection over the eight fixed lines.

use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The eight winning lines, checked rows, then columns, then diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line held by a single mark,
/// `None` otherwise. Pure and total over every board contents; a legal
/// game can only ever produce one winning line for the most recent mark,
/// so the scan order affects nothing but short-circuit cost.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }

    None
}
