//! Exhaustive minimax move selection.
//!
//! Terminal positions score `+1` when O has won, `-1` when X has won and
//! `0` for a draw. Depth never enters the score, so a win in one move and a
//! win in five are worth the same. O maximizes, X minimizes.
//!
//! The search copies the board at every ply; nothing is mutated in place.

use super::action::NoLegalMove;
use super::rules::status_of;
use super::types::{Board, CELLS, GameStatus, Player};
use tracing::{debug, instrument};

/// Minimax value of a position.
pub type Score = i8;

/// Score of a position O has won.
pub const O_WINS: Score = 1;
/// Score of a position X has won.
pub const X_WINS: Score = -1;
/// Score of a drawn position.
pub const DRAW: Score = 0;

/// Terminal score of `status`, or `None` while the game is running.
pub fn terminal_score(status: GameStatus) -> Option<Score> {
    match status {
        GameStatus::Won(Player::O) => Some(O_WINS),
        GameStatus::Won(Player::X) => Some(X_WINS),
        GameStatus::Draw => Some(DRAW),
        GameStatus::InProgress => None,
    }
}

/// True when `candidate` is strictly better than `best` for `player`.
///
/// Strict comparison is what makes the lowest cell index win ties.
fn improves(player: Player, candidate: Score, best: Score) -> bool {
    match player {
        Player::O => candidate > best,
        Player::X => candidate < best,
    }
}

/// Worst possible starting value for `player`'s running best.
fn worst_for(player: Player) -> Score {
    match player {
        Player::O => Score::MIN,
        Player::X => Score::MAX,
    }
}

/// Counts visited nodes for the debug log.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: Board, to_move: Player) -> Score {
        self.nodes += 1;

        if let Some(score) = terminal_score(status_of(&board)) {
            return score;
        }

        let mut best = worst_for(to_move);
        for cell in board.empty_cells() {
            let score = self.minimax(board.with_mark(cell, to_move), to_move.opponent());
            if improves(to_move, score, best) {
                best = score;
            }
        }
        best
    }

    /// Scores each legal reply of `to_move`, in ascending cell order.
    fn children(&mut self, board: &Board, to_move: Player) -> Vec<(usize, Score)> {
        board
            .empty_cells()
            .map(|cell| {
                let child = board.with_mark(cell, to_move);
                (cell, self.minimax(child, to_move.opponent()))
            })
            .collect()
    }
}

/// Full-depth minimax value of `board` with `to_move` on turn.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, to_move: Player) -> Score {
    let mut search = Search::default();
    let score = search.minimax(*board, to_move);
    debug!(score, nodes = search.nodes, "Position evaluated");
    score
}

/// Minimax value of every legal reply for `to_move`.
///
/// Occupied cells map to `None`.
#[instrument(skip(board), fields(board = %board))]
pub fn move_scores(board: &Board, to_move: Player) -> [Option<Score>; CELLS] {
    let mut search = Search::default();
    let mut scores = [None; CELLS];
    for (cell, score) in search.children(board, to_move) {
        scores[cell] = Some(score);
    }
    debug!(nodes = search.nodes, "Move scores computed");
    scores
}

/// Picks the optimal cell for `to_move`.
///
/// O takes the highest-scoring reply and X the lowest; among equal scores
/// the lowest cell index wins. Called on a board that is already won but
/// not full, every reply scores the same and the first empty cell is
/// returned.
///
/// # Errors
///
/// Returns [`NoLegalMove`] if the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, to_move: Player) -> Result<usize, NoLegalMove> {
    let mut search = Search::default();
    let mut best: Option<(usize, Score)> = None;

    for (cell, score) in search.children(board, to_move) {
        let best_score = best.map_or(worst_for(to_move), |(_, s)| s);
        if best.is_none() || improves(to_move, score, best_score) {
            best = Some((cell, score));
        }
    }

    let (cell, score) = best.ok_or(NoLegalMove)?;
    debug!(cell, score, nodes = search.nodes, "Best move selected");
    Ok(cell)
}

/// Picks the optimal cell for O, the computer's side.
pub fn best_move_for_o(board: &Board) -> Result<usize, NoLegalMove> {
    best_move(board, Player::O)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(GameStatus::Won(Player::O)), Some(1));
        assert_eq!(terminal_score(GameStatus::Won(Player::X)), Some(-1));
        assert_eq!(terminal_score(GameStatus::Draw), Some(0));
        assert_eq!(terminal_score(GameStatus::InProgress), None);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(evaluate(&Board::new(), Player::X), DRAW);
        assert_eq!(evaluate(&Board::new(), Player::O), DRAW);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O . / X X . / X . .
        let board: Board = "OO.XX.X..".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Ok(2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X X . / . O . / . . .
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Ok(2));
    }

    #[test]
    fn test_x_side_minimizes() {
        // X X . / O O . / . . .  X to move wins at 2.
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(best_move(&board, Player::X), Ok(2));
        assert_eq!(evaluate(&board, Player::X), X_WINS);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Err(NoLegalMove));
        assert_eq!(move_scores(&board, Player::O), [None; CELLS]);
    }

    #[test]
    fn test_won_board_with_empties_returns_first_empty() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Ok(5));
    }
}
