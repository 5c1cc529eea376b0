//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer's side).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Error returned by [`Board::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The string did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    BadCell(#[error(not(source))] char),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major: rows are `{0,1,2}`, `{3,4,5}`, `{6,7,8}`.
/// The board is `Copy` so search code can branch on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from raw squares.
    ///
    /// No mark-count validation is performed; analysis helpers accept
    /// arbitrary positions.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// The caller guarantees `index` is in range.
    pub(crate) fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Iterates over empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Counts occupied squares.
    pub fn occupied(&self) -> usize {
        CELLS - self.empty_cells().count()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact nine-character form, e.g. `X...O....`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Accepts `X`/`O` (any case) for marks and `.`, `-`, `_` or a space for
/// empty cells. Commas and `|` separators are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !matches!(c, ',' | '|' | '\n' | '\r'))
            .map(|c| match c {
                'x' | 'X' => Ok(Square::Occupied(Player::X)),
                'o' | 'O' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' | ' ' => Ok(Square::Empty),
                other => Err(ParseBoardError::BadCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; CELLS] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
///
/// Always derivable from the board alone; see [`crate::status_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.set(9, Square::Occupied(Player::X)),
            Err(BoardError::OutOfBounds(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_and_format() {
        let board: Board = "X-O|...|..x".parse().expect("valid board");
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(2), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(8), Some(Square::Occupied(Player::X)));
        assert_eq!(board.to_string(), "X.O.....X");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "XOXOXOXOZ".parse::<Board>(),
            Err(ParseBoardError::BadCell('Z'))
        );
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X...O...X".parse().unwrap();
        let empties: Vec<_> = board.empty_cells().collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.occupied(), 3);
        assert!(!board.is_full());
        assert!("XOXOXXOXO".parse::<Board>().unwrap().is_full());
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("o".parse::<Player>(), Ok(Player::O));
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
