//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line and its owner.
///
/// Lines are scanned in [`WINNING_LINES`] order, so when a malformed board
/// has several completed lines the earliest one is reported.
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O.O.O..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, [2, 4, 6])));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // Unreachable in legal play.
        let board: Board = "OOOXXX...".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, [0, 1, 2])));
    }
}
