//! Tests for the presentation snapshot.

use serde_json::json;
use tictactoe_core::{GameState, Player, Position};

fn play(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &cell in cells {
        game.apply_move(Position::from_index(cell).unwrap()).unwrap();
    }
    game
}

#[test]
fn test_status_lines() {
    assert_eq!(GameState::new().status_line(), "Next player: X");
    assert_eq!(play(&[4]).status_line(), "Next player: O");
    assert_eq!(play(&[0, 4, 1, 5, 2]).status_line(), "Winner: X");
    assert_eq!(play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status_line(), "Draw");
}

#[test]
fn test_view_of_won_game() {
    let view = play(&[0, 4, 1, 5, 2]).view();
    assert_eq!(view.winning_line(), &vec![0, 1, 2]);
    assert!(view.is_winning_cell(Position::TopCenter));
    assert!(!view.is_winning_cell(Position::Center));
    assert_eq!(view.board()[4], Some(Player::O));
    assert_eq!(view.board()[8], None);
    assert_eq!(view.moves().len(), 6);
    assert!(view.moves()[5].current());
}

#[test]
fn test_reversed_view_lists_newest_first() {
    let mut game = play(&[0, 4]);
    game.toggle_history_order();
    let view = game.view();
    assert!(view.reversed());
    let descriptions: Vec<&str> = view
        .moves()
        .iter()
        .map(|m| m.description().as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Go to move #2 (O at Row: 2, Col: 2)",
            "Go to move #1 (X at Row: 1, Col: 1)",
            "Go to game start",
        ]
    );
}

#[test]
fn test_view_serializes_for_front_ends() {
    let view = play(&[4]).view();
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value["board"],
        json!([null, null, null, null, "X", null, null, null, null])
    );
    assert_eq!(value["next_player"], json!("O"));
    assert_eq!(value["status"], json!("Next player: O"));
    assert_eq!(value["winning_line"], json!([]));
    assert_eq!(value["reversed"], json!(false));
    assert_eq!(
        value["moves"][1],
        json!({
            "step": 1,
            "row": 2,
            "col": 2,
            "player": "X",
            "current": true,
            "description": "Go to move #1 (X at Row: 2, Col: 2)",
        })
    );
    assert_eq!(value["moves"][0]["player"], json!(null));
}
