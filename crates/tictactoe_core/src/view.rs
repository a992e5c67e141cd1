//! Read-only snapshot of a game for presentation layers.

use super::history::{GameState, GameStatus, MoveRecord};
use super::{Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    #[getter(copy)]
    step: usize,
    /// 1-based row of the move, absent for the game start.
    #[getter(copy)]
    row: Option<u8>,
    /// 1-based column of the move, absent for the game start.
    #[getter(copy)]
    col: Option<u8>,
    /// Player who moved, absent for the game start.
    #[getter(copy)]
    player: Option<Player>,
    /// Whether this is the step on screen.
    #[getter(copy)]
    current: bool,
    /// Button text, e.g. `Go to move #2 (O at Row: 2, Col: 2)`.
    description: String,
}

impl MoveEntry {
    fn new(step: usize, record: &MoveRecord, current: bool) -> Self {
        let description = match record.placement() {
            None => "Go to game start".to_string(),
            Some(action) => format!("Go to move #{} ({})", step, action),
        };
        Self {
            step,
            row: record.row(),
            col: record.col(),
            player: record.player(),
            current,
            description,
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Cells of the current board, row-major.
    board: [Option<Player>; 9],
    /// Indices of the winning line, empty when nobody has won.
    winning_line: Vec<usize>,
    /// Player to move at the current step.
    #[getter(copy)]
    next_player: Player,
    /// Status line.
    status: String,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether the move list is newest first.
    #[getter(copy)]
    reversed: bool,
    /// Current step.
    #[getter(copy)]
    step: usize,
}

impl GameView {
    /// Whether the given cell is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos.to_index())
    }
}

impl GameState {
    /// Status line for the current step.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner: {}", win.player()),
            GameStatus::Drawn => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Move list in the current display order.
    ///
    /// Entries always carry their true history step, whatever the order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry::new(step, record, step == self.step()));
        if self.order().is_reversed() {
            entries.rev().collect()
        } else {
            entries.collect()
        }
    }

    /// Snapshot of the current step for rendering.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn view(&self) -> GameView {
        let winning_line = self
            .winner()
            .map(|win| win.indices().to_vec())
            .unwrap_or_default();
        let squares = *self.board().squares();
        GameView {
            board: squares.map(|square| square.player()),
            winning_line,
            next_player: self.to_move(),
            status: self.status_line(),
            moves: self.moves(),
            reversed: self.order().is_reversed(),
            step: self.step(),
        }
    }
}
