//! One-shot subcommands that analyze or play boards without the TUI.

use anyhow::{Context, Result};
use noughts_core::{
    Board, GameSession, GameStatus, Move, Player, Score, best_move, move_scores, status_of,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Result of the `best-move` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Board that was analyzed.
    pub board: String,
    /// Side to move.
    pub player: Player,
    /// Selected cell (0-8).
    pub cell: usize,
    /// Minimax score of every cell, `None` for occupied cells.
    pub scores: Vec<Option<Score>>,
}

impl std::fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Best move for {}: {}", self.player, self.cell)?;
        writeln!(f, "Scores (+1 O wins, -1 X wins, 0 draw):")?;
        for row in self.scores.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|score| match score {
                    Some(s) => format!("{s:>3}"),
                    None => "  -".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Transcript of a self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// Moves in order.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: String,
    /// Final status.
    pub status: GameStatus,
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ply, mv) in self.moves.iter().enumerate() {
            writeln!(f, "{:>2}. {}", ply + 1, mv)?;
        }
        writeln!(f, "Final board: {}", self.board)?;
        write!(f, "Result: {}", self.status)
    }
}

fn parse_board(board: &str) -> Result<Board> {
    board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))
}

/// Finds the optimal move for `player` on `board`.
#[instrument]
pub fn best_move_report(board: &str, player: Player) -> Result<BestMoveReport> {
    let parsed = parse_board(board)?;
    let cell = best_move(&parsed, player)?;
    info!(cell, "Best move found");
    Ok(BestMoveReport {
        board: parsed.to_string(),
        player,
        cell,
        scores: move_scores(&parsed, player).to_vec(),
    })
}

/// Derives the status of `board`.
#[instrument]
pub fn status_report(board: &str) -> Result<GameStatus> {
    Ok(status_of(&parse_board(board)?))
}

/// Plays the selector against itself from the empty board.
#[instrument]
pub fn self_play() -> Result<SelfPlayReport> {
    let mut session = GameSession::new();
    while !session.is_over() {
        let player = session.to_move();
        let cell = best_move(session.board(), player)?;
        session.apply_move(cell, player)?;
    }
    info!(status = %session.status(), "Self-play finished");
    Ok(SelfPlayReport {
        moves: session.history().to_vec(),
        board: session.board().to_string(),
        status: session.status(),
    })
}

/// Renders a report as text or pretty JSON.
pub fn render<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::NoLegalMove;

    #[test]
    fn test_best_move_report() {
        let report = best_move_report("....X....", Player::O).unwrap();
        assert_eq!(report.cell, 0);
        assert_eq!(report.scores[4], None);
        assert!(report.to_string().starts_with("Best move for O: 0"));
    }

    #[test]
    fn test_best_move_on_full_board_fails() {
        let err = best_move_report("XOXOXOOXO", Player::O).unwrap_err();
        assert!(err.downcast_ref::<NoLegalMove>().is_some());
    }

    #[test]
    fn test_bad_board_is_reported() {
        let err = best_move_report("XOX", Player::O).unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
    }

    #[test]
    fn test_status_report() {
        assert_eq!(status_report("XOXOXOOXO").unwrap(), GameStatus::Draw);
        assert_eq!(
            status_report("XOXXOOOO.").unwrap(),
            GameStatus::Won(Player::O)
        );
    }

    #[test]
    fn test_self_play_draws() {
        let report = self_play().unwrap();
        assert_eq!(report.status, GameStatus::Draw);
        assert_eq!(report.moves.len(), 9);
        assert_eq!(report.moves[0], Move::new(Player::X, 0));
    }

    #[test]
    fn test_render_json() {
        let report = self_play().unwrap();
        let json = render(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Draw");
    }
}
