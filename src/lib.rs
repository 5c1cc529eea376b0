//! Noughts - tic-tac-toe front ends over [`noughts_core`].
//!
//! # Architecture
//!
//! - **Core** (`noughts_core`): board, rules, session engine, minimax
//! - **Config**: TOML settings for the terminal front end
//! - **Commands**: one-shot board analysis and self-play
//! - **TUI**: ratatui front end, human vs human or human vs computer
//!
//! # Example
//!
//! ```
//! use noughts::{best_move_report, self_play};
//! use noughts_core::{GameStatus, Player};
//!
//! let report = best_move_report("....X....", Player::O)?;
//! assert_eq!(report.cell, 0);
//! assert_eq!(self_play()?.status, GameStatus::Draw);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod tui;

pub use cli::{Cli, Command, GameMode};
pub use commands::{
    BestMoveReport, SelfPlayReport, best_move_report, render, self_play, status_report,
};
pub use config::{ConfigError, NoughtsConfig};
pub use tui::{App, ComputerRequest, Screen, run_tui};
