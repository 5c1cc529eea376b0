//! Pure tic-tac-toe game logic with a perfect minimax opponent.
//!
//! Two pieces, composed linearly:
//!
//! - [`GameSession`] owns the board and the turn, and is changed only by
//!   [`GameSession::apply_move`].
//! - [`best_move`] picks the optimal reply by exhaustive minimax, reusing
//!   the same win check ([`status_of`]) the session uses.
//!
//! ```
//! use noughts_core::{GameSession, GameStatus, Player, best_move};
//!
//! let mut session = GameSession::new();
//! session.apply_move(4, Player::X)?;
//!
//! let reply = best_move(session.board(), Player::O)?;
//! assert_eq!(reply, 0);
//! session.apply_move(reply, Player::O)?;
//! assert_eq!(session.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod minimax;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{InvalidMove, Move, NoLegalMove};
pub use minimax::{
    DRAW, O_WINS, Score, X_WINS, best_move, best_move_for_o, evaluate, move_scores,
    terminal_score,
};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, status_of, winning_line};
pub use session::GameSession;
pub use types::{Board, BoardError, CELLS, GameStatus, ParseBoardError, Player, Square};
