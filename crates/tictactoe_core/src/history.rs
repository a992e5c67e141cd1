//! Game state: an append-or-rewrite move history and a step pointer.
//!
//! History always starts with a sentinel record holding the empty board.
//! The step pointer selects which record is on screen. Playing a move from
//! an earlier step discards every record after it before appending, so an
//! overwritten future cannot be redone.

use super::action::{GameError, Move};
use super::invariants::{HistoryInvariants, InvariantSet, assert_invariants};
use super::rules::{self, Win};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One history entry: the board after a move, plus the move itself.
///
/// The first record of every history has no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub(crate) board: Board,
    pub(crate) placement: Option<Move>,
}

impl MoveRecord {
    /// The sentinel record: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            placement: None,
        }
    }

    /// Board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this record.
    pub fn placement(&self) -> Option<Move> {
        self.placement
    }

    /// Player who moved.
    pub fn player(&self) -> Option<Player> {
        self.placement.map(|m| m.player)
    }

    /// 1-based row of the placed mark.
    pub fn row(&self) -> Option<u8> {
        self.placement.map(|m| m.row())
    }

    /// 1-based column of the placed mark.
    pub fn col(&self) -> Option<u8> {
        self.placement.map(|m| m.col())
    }

    /// True for the sentinel record.
    pub fn is_start(&self) -> bool {
        self.placement.is_none()
    }
}

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Oldest first.
    #[default]
    Chronological,
    /// Newest first.
    Reversed,
}

impl HistoryOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Chronological => HistoryOrder::Reversed,
            HistoryOrder::Reversed => HistoryOrder::Chronological,
        }
    }

    /// Whether the list is shown newest first.
    pub fn is_reversed(self) -> bool {
        self == HistoryOrder::Reversed
    }
}

/// Phase of the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    InProgress,
    /// A line is complete.
    Won(Win),
    /// Board is full with no winner.
    Drawn,
}

impl GameStatus {
    /// Classifies a board snapshot.
    pub fn of(board: &Board) -> Self {
        match rules::detect_winner(board) {
            Some(win) => GameStatus::Won(win),
            None if rules::is_full(board) => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Returns true once no further move is possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// A single owner mutates it; every operation either applies fully or
/// leaves the state exactly as it was. Deserialization goes through the
/// history invariants, so a decoded state is always one that play could
/// have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) step: usize,
    pub(crate) order: HistoryOrder,
}

impl GameState {
    /// Creates a new game: one sentinel record, pointer at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: vec![MoveRecord::start()],
            step: 0,
            order,
        }
    }

    /// Discards all history and starts over, keeping the display order.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::with_order(self.order);
        debug!("Game reset");
    }

    /// Full history, sentinel included.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the record on screen.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Record at the current step.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::detect_winner(self.board())
    }

    /// Phase of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board())
    }

    /// Move-list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Places the current player's mark at `position`.
    ///
    /// History after the current step is dropped first, then the new record
    /// is appended and becomes current.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the current board already has a winner.
    /// - [`GameError::SquareOccupied`] if the square is taken.
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> Result<&MoveRecord, GameError> {
        let current = self.current();
        if let Some(win) = rules::detect_winner(current.board()) {
            debug!(winner = %win.player(), "Move rejected, game already won");
            return Err(GameError::GameOver {
                winner: win.player(),
            });
        }
        if !current.board().is_empty(position) {
            debug!("Move rejected, square occupied");
            return Err(GameError::SquareOccupied { position });
        }

        let player = self.to_move();
        let mut board = current.board().clone();
        board.set(position, Square::Occupied(player));

        let dropped = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(MoveRecord {
            board,
            placement: Some(Move::new(player, position)),
        });
        self.step = self.history.len() - 1;
        debug!(step = self.step, dropped, "Move applied");

        assert_invariants(self);
        Ok(self.current())
    }

    /// Moves the pointer to `step` without touching history.
    ///
    /// # Errors
    ///
    /// [`GameError::StepOutOfRange`] if `step` is past the last record.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(to_move = %self.to_move(), "Jumped");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = ?self.order, "History order toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<MoveRecord>,
    step: usize,
    order: HistoryOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    #[instrument(skip(raw), fields(len = raw.history.len(), step = raw.step))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step: raw.step,
            order: raw.order,
        };
        HistoryInvariants::check_all(&state).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvalidHistory { reason }
        })?;
        Ok(state)
    }
}
