//! First-class action types for tic-tac-toe.
//!
//! A move is the domain event stored in each history record: who placed a
//! mark and where. Rejected actions are reported as [`GameError`] and never
//! change the game.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// 1-based row of the placed mark.
    pub fn row(&self) -> u8 {
        self.position.row()
    }

    /// 1-based column of the placed mark.
    pub fn col(&self) -> u8 {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at Row: {}, Col: {}",
            self.player,
            self.row(),
            self.col()
        )
    }
}

/// Error returned when an action is rejected. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The board at the current step already has a winner.
    #[display("Game is already over: {} has won", winner)]
    GameOver {
        /// Winner on the current board.
        winner: Player,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", position)]
    SquareOccupied {
        /// The occupied position.
        position: Position,
    },

    /// A history step past the end of the history was requested.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// A deserialized history breaks the history invariants.
    #[display("Invalid game history: {}", reason)]
    InvalidHistory {
        /// Descriptions of the violated invariants.
        reason: String,
    },
}

impl std::error::Error for GameError {}
