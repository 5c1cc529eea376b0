//! Moves and the errors raised when applying or choosing them.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8) where the mark goes.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Returns the named position, if the cell is on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> cell {}", self.player, self.cell),
        }
    }
}

/// A move the engine refused. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The move was submitted for the side that is not on turn.
    #[display("It's {}'s turn, not {}'s", expected, attempted)]
    NotYourTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player that tried to move.
        attempted: Player,
    },

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

impl std::error::Error for InvalidMove {}

/// The selector was asked for a move on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;
