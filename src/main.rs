//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{
    Cli, Command, NoughtsConfig, best_move_report, render, run_tui, self_play, status_report,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        // The TUI installs its own file logger.
        Command::Play { mode, hints } => {
            let config = NoughtsConfig::load_or_default(&cli.config)?.with_hints(hints);
            run_tui(config, mode).await
        }
        Command::BestMove {
            board,
            player,
            json,
        } => {
            init_stderr_tracing();
            let report = best_move_report(&board, player)?;
            println!("{}", render(&report, json)?);
            Ok(())
        }
        Command::Status { board } => {
            init_stderr_tracing();
            println!("{}", status_report(&board)?);
            Ok(())
        }
        Command::SelfPlay { json } => {
            init_stderr_tracing();
            info!("Starting self-play");
            println!("{}", render(&self_play()?, json)?);
            Ok(())
        }
    }
}

/// Logs to stderr so stdout stays clean for piping.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
