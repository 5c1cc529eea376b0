//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, ComputerRequest, Screen};

use crate::cli::GameMode;
use crate::config::NoughtsConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{NoLegalMove, Player, best_move};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Reply from a background search: generation and the chosen cell.
type ComputerReply = (u64, Result<usize, NoLegalMove>);

/// Runs the TUI until the user quits.
///
/// Logs go to the configured log file while the TUI owns the terminal.
pub async fn run_tui(config: NoughtsConfig, mode: Option<GameMode>) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?mode, "Starting noughts TUI");

    enable_raw_mode()?;
    let mut terminal = cleanup_on_err(enter_terminal(), restore_terminal)?;

    let res = run_app(&mut terminal, &config, mode).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort undo of raw mode and the alternate screen.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs `cleanup` before handing back an error.
fn cleanup_on_err<T>(result: Result<T>, cleanup: impl FnOnce()) -> Result<T> {
    if let Err(e) = &result {
        error!(error = ?e, "Terminal setup failed");
        cleanup();
    }
    result
}

/// Event loop: redraw, then wait for a key or a computer reply.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &NoughtsConfig,
    mode: Option<GameMode>,
) -> Result<()> {
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<ComputerReply>();
    spawn_input_thread(key_tx);

    let delay = Duration::from_millis(*config.computer_delay_ms());
    let mut app = App::new(*config.show_hints());
    if let Some(mode) = mode
        && let Some(request) = app.start(mode)
    {
        schedule_computer(request, delay, reply_tx.clone());
    }

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    warn!("Input channel closed");
                    return Ok(());
                };
                if let Some(request) = app.handle_key(key) {
                    schedule_computer(request, delay, reply_tx.clone());
                }
            }
            Some((generation, reply)) = reply_rx.recv() => {
                match reply {
                    Ok(cell) => app.computer_move(generation, cell),
                    Err(e) => app.computer_failed(generation, &e.to_string()),
                }
            }
        }

        if app.take_bell() && *config.bell() {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}

/// Forwards key presses from crossterm's blocking reader.
fn spawn_input_thread(tx: mpsc::UnboundedSender<KeyCode>) {
    std::thread::spawn(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key.code).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("Input thread exiting");
    });
}

/// Runs the search for O after the configured pause.
/// The search itself runs on the blocking pool.
#[instrument(skip(reply_tx), fields(generation = request.generation, board = %request.board))]
fn schedule_computer(
    request: ComputerRequest,
    delay: Duration,
    reply_tx: mpsc::UnboundedSender<ComputerReply>,
) {
    debug!("Scheduling computer move");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let board = request.board;
        let reply = match tokio::task::spawn_blocking(move || best_move(&board, Player::O)).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Search task failed");
                return;
            }
        };
        let _ = reply_tx.send((request.generation, reply));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_setup_failure_runs_cleanup() {
        let cleaned = Cell::new(false);
        let result: Result<()> =
            cleanup_on_err(Err(anyhow::anyhow!("no tty")), || cleaned.set(true));
        assert!(result.is_err());
        assert!(cleaned.get());
    }

    #[test]
    fn test_setup_success_skips_cleanup() {
        let cleaned = Cell::new(false);
        let result = cleanup_on_err(Ok(7), || cleaned.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!cleaned.get());
    }
}
