//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board from scratch. The session engine
//! and the minimax selector both call into this module, so there is exactly
//! one definition of what a win or a draw is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from the board alone.
///
/// A completed line wins even on a full board; a full board without a line
/// is a draw; anything else is still in progress.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn status_of(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_status_empty_board() {
        assert_eq!(status_of(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_status_full_board_with_line_is_won() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(status_of(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(status_of(&board), GameStatus::Draw);
    }
}
