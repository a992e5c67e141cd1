//! Headless replay: play a list of cells and print the resulting view.

use anyhow::{Context, Result};
use tictactoe_core::{GameState, GameView, HistoryOrder, Position};
use tracing::{info, instrument, warn};

/// Plays `cells` in order, then optionally jumps to `jump`.
///
/// Rejected moves are logged and skipped, exactly as the interactive UI
/// ignores them. An out-of-range jump is an error.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(cells: &[Position], jump: Option<usize>, order: HistoryOrder) -> Result<GameState> {
    let mut game = GameState::with_order(order);
    for (i, &position) in cells.iter().enumerate() {
        if let Err(e) = game.apply_move(position) {
            warn!(move_number = i + 1, %position, error = %e, "Move ignored");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    info!(step = game.step(), status = %game.status_line(), "Replay finished");
    Ok(game)
}

/// Renders the current step as plain text: board, status, then the move list.
///
/// The board is the [`Board`](tictactoe_core::Board) `Display` form.
pub fn render_text(game: &GameState) -> String {
    let view = game.view();
    let mut out = format!("{}\n\n{}\n", game.board(), view.status());
    if !view.winning_line().is_empty() {
        out.push_str(&format!("Winning line: {:?}\n", view.winning_line()));
    }
    out.push('\n');
    for entry in view.moves() {
        let marker = if entry.current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.description()));
    }
    out
}

/// Renders a view as pretty-printed JSON.
pub fn render_json(view: &GameView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize game view")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_replay_skips_rejected_moves() {
        let game = replay(&cells(&[0, 0, 4]), None, HistoryOrder::Chronological).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.board().occupied(), 2);
    }

    #[test]
    fn test_replay_jump() {
        let game = replay(&cells(&[0, 4, 8]), Some(1), HistoryOrder::Chronological).unwrap();
        assert_eq!(game.step(), 1);
        assert_eq!(game.history().len(), 4);
        assert!(replay(&cells(&[0]), Some(5), HistoryOrder::Chronological).is_err());
    }

    #[test]
    fn test_render_text() {
        let game = replay(&cells(&[0, 4, 1, 5, 2]), None, HistoryOrder::Reversed).unwrap();
        let text = render_text(&game);
        let expected = "\
X|X|X
-+-+-
4|O|O
-+-+-
7|8|9

Winner: X
Winning line: [0, 1, 2]

> Go to move #5 (X at Row: 1, Col: 3)
  Go to move #4 (O at Row: 2, Col: 3)
  Go to move #3 (X at Row: 1, Col: 2)
  Go to move #2 (O at Row: 2, Col: 2)
  Go to move #1 (X at Row: 1, Col: 1)
  Go to game start
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_board_follows_jump() {
        let game = replay(&cells(&[0, 4, 8]), Some(1), HistoryOrder::Chronological).unwrap();
        let text = render_text(&game);
        let board = game.board().to_string();
        assert!(text.starts_with(&format!("{}\n\nNext player: O\n", board)));
        assert_eq!(board, "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
        assert!(text.contains("> Go to move #1 (X at Row: 1, Col: 1)\n"));
    }

    #[test]
    fn test_render_json() {
        let game = replay(&cells(&[4]), None, HistoryOrder::Chronological).unwrap();
        let json = render_json(&game.view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["next_player"], "O");
        assert_eq!(value["moves"].as_array().map(Vec::len), Some(2));
    }
}
