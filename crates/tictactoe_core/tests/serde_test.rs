//! Tests for decoding game states from JSON.

use serde_json::json;
use tictactoe_core::{GameError, GameState, HistoryOrder, MoveRecord, Position};

fn play(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &cell in cells {
        game.apply_move(Position::from_index(cell).expect("index in range"))
            .expect("legal move");
    }
    game
}

#[test]
fn test_played_game_decodes_and_keeps_playing() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();
    game.toggle_history_order();

    let json = serde_json::to_string(&game).unwrap();
    let mut decoded: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, game);

    decoded.apply_move(Position::BottomRight).unwrap();
    assert_eq!(decoded.history().len(), 3);
    assert_eq!(decoded.order(), HistoryOrder::Reversed);
}

#[test]
fn test_empty_history_is_rejected() {
    let value = json!({ "history": [], "step": 0, "order": "Chronological" });
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Invalid game history"));
}

#[test]
fn test_step_past_end_is_rejected() {
    let sentinel = serde_json::to_value(MoveRecord::start()).unwrap();
    let value = json!({ "history": [sentinel], "step": 7, "order": "Chronological" });
    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_tampered_record_is_rejected() {
    let game = play(&[0, 4]);
    let mut value = serde_json::to_value(&game).unwrap();
    // Replace O's record with a second copy of X's.
    value["history"][2] = value["history"][1].clone();
    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_invalid_history_error_lists_violations() {
    let err = GameError::InvalidHistory {
        reason: "Players alternate turns (X, O, X, O, ...)".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid game history: Players alternate turns (X, O, X, O, ...)"
    );
}
