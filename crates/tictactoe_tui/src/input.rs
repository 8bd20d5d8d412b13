//! Pure keyboard mapping for the board grid.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// Moves the cursor one cell in the arrow direction, clamped to the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to cells, row-major from the top-left.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => Position::from_index(c as usize - '1' as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::TopRight, KeyCode::Down),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_other_keys_leave_cursor_in_place() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Char('x')),
            Position::Center
        );
    }

    #[test]
    fn test_digit_keys_map_row_major() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(Position::TopLeft));
        assert_eq!(digit_cell(KeyCode::Char('5')), Some(Position::Center));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(Position::BottomRight));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Enter), None);
    }
}
