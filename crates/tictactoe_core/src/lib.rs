//! Tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **History**: [`GameState`] owns every board snapshot plus a step pointer
//! - **Invariants**: properties every accepted move preserves
//! - **View**: [`GameView`], the serialisable snapshot a front end draws
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 4, 1, 5, 2] {
//!     game.apply_move(Position::from_index(pos).unwrap()).unwrap();
//! }
//! let win = game.winner().unwrap();
//! assert_eq!(win.player(), Player::X);
//! assert_eq!(win.indices(), [0, 1, 2]);
//!
//! // Jumping back reopens the game; the next move rewrites history.
//! game.jump_to(2).unwrap();
//! game.apply_move(Position::BottomRight).unwrap();
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

// Crate-level exports - Domain types
pub use action::{GameError, Move};
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{Win, detect_winner, is_draw, is_full};

// Crate-level exports - Game state
pub use history::{GameState, GameStatus, HistoryOrder, MoveRecord};

// Crate-level exports - View model
pub use view::{GameView, MoveEntry};
