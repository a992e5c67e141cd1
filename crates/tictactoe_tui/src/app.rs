//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{GameState, HistoryOrder, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys walk the move list.
    History,
}

/// Main application state.
///
/// Owns the only [`GameState`]; every key press is handled to completion
/// before the next one is read.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(position) = digit_position(key) {
            self.cursor = position;
            self.place(position);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('h') => {
                self.game.toggle_history_order();
            }
            KeyCode::Char('n') => {
                self.game.reset();
                self.selected_step = 0;
                info!("New game");
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected_step = self.game.step();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected_step),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::History => {
                self.select_neighbour(key == KeyCode::Down);
            }
            _ if self.focus == Focus::Board => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Places a mark; rejected moves leave everything as it was.
    fn place(&mut self, position: Position) {
        match self.game.apply_move(position) {
            Ok(record) => {
                debug!(?record, "Move placed");
                self.selected_step = self.game.step();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Moves the list selection one row, in display order.
    fn select_neighbour(&mut self, down: bool) {
        let moves = self.game.moves();
        let Some(row) = moves.iter().position(|m| m.step() == self.selected_step) else {
            self.selected_step = self.game.step();
            return;
        };
        let row = if down {
            (row + 1).min(moves.len() - 1)
        } else {
            row.saturating_sub(1)
        };
        self.selected_step = moves[row].step();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(HistoryOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameStatus, Player};

    fn keys(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::default();
        keys(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.game().step(), 2);
        assert_eq!(app.game().to_move(), Player::X);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_and_enter_play_moves() {
        let mut app = App::default();
        keys(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::default();
        keys(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::default();
        keys(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')],
        );
        keys(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history().len(), 4);

        // Placing from the past rewrites the future.
        keys(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_history_navigation_follows_reversed_order() {
        let mut app = App::default();
        keys(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        keys(&mut app, &[KeyCode::Char('h'), KeyCode::Tab]);
        assert!(app.game().order().is_reversed());

        // Newest first: moving down goes back in time.
        keys(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().step(), 1);
        keys(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().step(), 0);
        keys(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.game().step(), 2);
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = App::new(HistoryOrder::Reversed);
        keys(&mut app, &[KeyCode::Char('1'), KeyCode::Char('n')]);
        assert_eq!(app.game().history().len(), 1);
        assert!(app.game().order().is_reversed());
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
