//! Monotonic board invariant: each record extends the previous one.

use super::super::{GameState, Square};
use super::Invariant;
use tracing::warn;

/// Invariant: record `k` is record `k - 1` plus exactly its own move.
///
/// The target square was empty before the move and no other square changed.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        for (k, pair) in state.history().windows(2).enumerate() {
            let [before, after] = pair else {
                continue;
            };
            let Some(action) = after.placement() else {
                warn!(step = k + 1, "Record without a move");
                return false;
            };
            if !before.board().is_empty(action.position) {
                warn!(step = k + 1, position = %action.position, "Move overwrote a mark");
                return false;
            }
            let mut expected = before.board().clone();
            expected.set(action.position, Square::Occupied(action.player));
            if &expected != after.board() {
                warn!(step = k + 1, "Board changed outside the move");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
