//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules never look at history;
//! [`GameState`](crate::GameState) composes them to decide move legality
//! and game phase.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, Win, detect_winner};
