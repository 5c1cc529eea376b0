//! Mark balance invariant: X has as many marks as O, or exactly one more.

use super::Invariant;
use crate::{Board, GameSession, Player};

/// Invariant: X moves first and the sides alternate, so the X count is
/// the O count or one more.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        Self::holds_for(session.board())
    }

    fn description() -> &'static str {
        "X count must equal O count or exceed it by one"
    }
}
