//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: players alternate, X first.
///
/// The move in record `k` belongs to the player whose turn it was at step
/// `k - 1`, and each board holds `ceil(k/2)` X marks and `floor(k/2)` O marks.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        for (k, record) in state.history().iter().enumerate().skip(1) {
            if record.player() != Some(Player::for_step(k - 1)) {
                warn!(step = k, player = ?record.player(), "Move out of turn");
                return false;
            }
            let x_count = record.board().count(Player::X);
            let o_count = record.board().count(Player::O);
            if x_count != k.div_ceil(2) || o_count != k / 2 {
                warn!(step = k, x_count, o_count, "Mark counts do not alternate");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Square};

    #[test]
    fn test_played_sequence_holds() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::TopLeft).unwrap();
        game.apply_move(Position::Center).unwrap();

        // Rewrite O's move as a second X move.
        let record = &mut game.history[2];
        record.board.set(Position::Center, Square::Occupied(Player::X));
        record.placement = Some(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
