//! Tests for the game state transition rule and derived status.

use tictactoe::{Cell, GameState, Mark, Position};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index in 0-8")
}

#[test]
fn test_new_game_reports_x_to_move() {
    let game = GameState::new();
    assert_eq!(game.status(), "Next player: X");
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameState::new();

    for (k, index) in [0, 3, 1, 4].into_iter().enumerate() {
        let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.next_mark(), expected, "before move {k}");
        game.apply(pos(index));
    }

    // Four accepted moves: X is back on turn.
    assert_eq!(game.next_mark(), Mark::X);
}

#[test]
fn test_occupied_cell_is_silently_rejected() {
    let mut game = GameState::new();
    game.apply(Position::TopLeft);

    // Re-activating the same cell any number of times changes nothing.
    for _ in 0..3 {
        game.apply(Position::TopLeft);
        assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(game.next_mark(), Mark::O);
    }

    let occupied = game
        .board()
        .cells()
        .iter()
        .filter(|c| **c != Cell::Empty)
        .count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::new();
    // X: 0, 1, 2; O: 3, 4.
    for index in [0, 3, 1, 4, 2] {
        game.apply(pos(index));
    }

    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.status(), "Winner: X");
}

#[test]
fn test_board_freezes_after_win() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply(pos(index));
    }
    assert_eq!(game.winner(), Some(Mark::X));

    let frozen = game.clone();
    for index in 0..9 {
        game.apply(pos(index));
    }
    assert_eq!(game, frozen);
    assert_eq!(game.status(), "Winner: X");
}

#[test]
fn test_full_board_without_winner_still_reports_next_player() {
    let mut game = GameState::new();
    // Fills to X,O,X / X,O,O / O,X,X with no line ever completed.
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.apply(pos(index));
        assert_eq!(game.winner(), None);
    }

    assert!(game.board().cells().iter().all(|c| *c != Cell::Empty));
    // No draw status exists; the status falls through to the next player.
    assert_eq!(game.status(), "Next player: O");
}

#[test]
fn test_reset_starts_a_fresh_game() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply(pos(index));
    }

    game.reset();
    assert_eq!(game, GameState::new());
    assert_eq!(game.status(), "Next player: X");
}

#[test]
fn test_state_survives_serialization() {
    let mut game = GameState::new();
    game.apply(Position::Center);
    game.apply(Position::TopLeft);

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
    assert_eq!(restored.status(), "Next player: X");
}
