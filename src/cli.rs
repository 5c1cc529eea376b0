//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::Player;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, strum::Display)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[strum(to_string = "Play a friend")]
    Friend,
    /// The human plays X, the computer plays O.
    #[default]
    #[strum(to_string = "Play the computer")]
    Computer,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Skip the mode chooser and start in this mode
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Show minimax scores for every empty cell
        #[arg(long)]
        hints: bool,
    },

    /// Print the optimal move for a board
    BestMove {
        /// Nine cells, row-major: X, O, and '.' for empty (e.g. "....X....")
        board: String,

        /// Side to move (defaults to O, the computer)
        #[arg(short, long, default_value = "O")]
        player: Player,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the status of a board
    Status {
        /// Nine cells, row-major: X, O, and '.' for empty
        board: String,
    },

    /// Let the minimax selector play both sides
    SelfPlay {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
