//! History consistency invariant: record k holds exactly k marks.

use super::super::{GameState, Square};
use super::Invariant;
use tracing::warn;

/// Invariant: the history is a well-formed sequence of snapshots.
///
/// - History is never empty and starts with the sentinel (empty board, no move).
/// - Record `k` has exactly `k` occupied squares and carries a move iff `k > 0`.
/// - The step pointer indexes an existing record.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some(first) = history.first() else {
            warn!("History is empty");
            return false;
        };
        if !first.is_start() || first.board().squares().iter().any(|s| *s != Square::Empty) {
            warn!("History does not start with the empty board");
            return false;
        }

        for (k, record) in history.iter().enumerate() {
            let filled = record.board().occupied();
            if filled != k || record.is_start() != (k == 0) {
                warn!(step = k, filled, "History record has wrong mark count");
                return false;
            }
        }

        let valid = state.step() < history.len();
        if !valid {
            warn!(step = state.step(), len = history.len(), "Step pointer out of range");
        }
        valid
    }

    fn description() -> &'static str {
        "History starts empty and record k holds k marks"
    }
}
