//! The game engine: one board and the side to move. Status is always
//! recomputed from the board.

use super::action::{InvalidMove, Move};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::status_of;
use super::types::{Board, CELLS, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
///
/// The session has one logical owner (the presentation layer) which issues
/// moves one at a time. The only mutation is [`GameSession::apply_move`];
/// a rejected move leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::with_capacity(CELLS),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this stays on the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        status_of(&self.board)
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }

    /// Places `player`'s mark on `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the cell is out of
    /// range, it is not `player`'s turn, or the cell is occupied. Checks run
    /// in that order and nothing is modified on failure.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, cell: usize, player: Player) -> Result<GameStatus, InvalidMove> {
        self.validate(cell, player)?;

        self.board = self.board.with_mark(cell, player);
        self.history.push(Move::new(player, cell));
        let status = status_of(&self.board);
        if status == GameStatus::InProgress {
            self.to_move = player.opponent();
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after {player} -> {cell}"
        );
        debug!(%status, "Move applied");
        Ok(status)
    }

    /// Returns a new session with the move applied, leaving `self` untouched.
    pub fn with_move(&self, cell: usize, player: Player) -> Result<GameSession, InvalidMove> {
        let mut next = self.clone();
        next.apply_move(cell, player)?;
        Ok(next)
    }

    /// Restores the initial state in place.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        *self = Self::new();
    }

    /// Rebuilds a session from a move list.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameSession, InvalidMove> {
        let mut session = Self::new();
        for mv in moves {
            session.apply_move(mv.cell, mv.player)?;
        }
        Ok(session)
    }

    fn validate(&self, cell: usize, player: Player) -> Result<(), InvalidMove> {
        let status = self.status();
        if status.is_terminal() {
            return Err(InvalidMove::GameOver(status));
        }
        if cell >= CELLS {
            return Err(InvalidMove::OutOfRange(cell));
        }
        if player != self.to_move {
            return Err(InvalidMove::NotYourTurn {
                expected: self.to_move,
                attempted: player,
            });
        }
        if !self.board.is_empty(cell) {
            return Err(InvalidMove::Occupied(cell));
        }
        Ok(())
    }

    /// Writes a mark without going through the rules.
    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, cell: usize, player: Player) {
        self.board
            .set(cell, super::types::Square::Occupied(player))
            .expect("cell in range");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
