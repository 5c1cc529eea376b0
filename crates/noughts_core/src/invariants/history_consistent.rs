//! History consistency invariant: the move log explains the board.

use super::Invariant;
use crate::{GameSession, Square};

/// Invariant: every occupied cell was placed by exactly one logged move,
/// and holds the mark of the player who made it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let history = session.history();

        if history.len() != board.occupied() {
            return false;
        }

        history
            .iter()
            .all(|mv| board.get(mv.cell) == Some(Square::Occupied(mv.player)))
    }

    fn description() -> &'static str {
        "History must match the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_for_new_session() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_detects_unlogged_mark() {
        let mut session = GameSession::new();
        session.apply_move(4, Player::X).unwrap();
        session.corrupt_for_test(8, Player::O);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
