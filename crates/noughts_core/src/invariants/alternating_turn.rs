//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is running,
/// the side to move is the one after the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(ply, mv)| mv.player == if ply % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        if session.is_over() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Players must alternate, starting with X"
    }
}
