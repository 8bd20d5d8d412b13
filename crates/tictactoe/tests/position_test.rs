//! Tests for the board position vocabulary.

use strum::IntoEnumIterator;
use tictactoe::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_indices_cover_the_grid_row_major() {
    let indices: Vec<usize> = Position::iter().map(Position::to_index).collect();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());

    for pos in Position::iter() {
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
}
