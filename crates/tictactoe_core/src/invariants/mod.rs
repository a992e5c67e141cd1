//! First-class invariants for the move history.
//!
//! Each invariant is a logical property of a [`GameState`] that every
//! accepted move must preserve. They are testable on their own and are
//! asserted after each move in debug builds.

use super::GameState;
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(results: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
);

/// Asserts that all history invariants hold (debug builds only).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        HistoryInvariants::check_all(state).is_ok(),
        "History invariants violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Position, Square};

    fn played(cells: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &cell in cells {
            game.apply_move(Position::from_index(cell).unwrap()).unwrap();
        }
        game
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewrite() {
        let mut game = played(&[0, 4, 8, 2]);
        game.jump_to(1).unwrap();
        game.apply_move(Position::BottomRight).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = played(&[0, 4]);
        // Drop a mark from the last board: wrong count and not an extension.
        game.history[2].board.set(Position::TopLeft, Square::Empty);
        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);

        let mut game = played(&[0]);
        game.history.push(MoveRecord::start());
        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&played(&[4, 0, 8])).is_ok());
    }
}
