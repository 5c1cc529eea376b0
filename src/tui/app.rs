//! Application state and logic.
//!
//! `App` owns the only [`GameSession`] and is driven by the event loop in
//! [`super::run_tui`]. It never blocks: when the computer is on turn it hands
//! back a [`ComputerRequest`] and the loop runs the search elsewhere.

use super::input::{Action, action_for, move_cursor};
use crate::cli::GameMode;
use crossterm::event::KeyCode;
use noughts_core::{
    Board, CELLS, GameSession, GameStatus, Player, Position, Score, move_scores, winning_line,
};
use tracing::{debug, info, instrument, warn};

/// Shown when the computer cannot move; the game only continues after a restart.
const RECOVER_HINT: &str = "Press 'r' to play again or 'm' for menu.";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing between friend and computer.
    ModeSelect {
        /// Highlighted option.
        selected: GameMode,
    },
    /// A game is on the board.
    Playing,
}

/// Ask the event loop to compute O's reply for this board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerRequest {
    /// Game the request belongs to; replies for older games are dropped.
    pub generation: u64,
    /// Board to search.
    pub board: Board,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    mode: GameMode,
    screen: Screen,
    cursor: Position,
    status_message: String,
    generation: u64,
    computer_thinking: bool,
    show_hints: bool,
    hints: Option<[Option<Score>; CELLS]>,
    ring_bell: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application on the mode chooser.
    pub fn new(show_hints: bool) -> Self {
        Self {
            session: GameSession::new(),
            mode: GameMode::default(),
            screen: Screen::ModeSelect {
                selected: GameMode::default(),
            },
            cursor: Position::Center,
            status_message: "Choose a game mode".to_string(),
            generation: 0,
            computer_thinking: false,
            show_hints,
            hints: None,
            ring_bell: false,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Gets the visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Minimax scores for the side to move, when hints are on.
    pub fn hints(&self) -> Option<&[Option<Score>; CELLS]> {
        self.hints.as_ref()
    }

    /// Cells of the completed line, for highlighting.
    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        winning_line(self.session.board()).map(|(_, line)| line)
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns and clears the pending end-of-game bell.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.ring_bell)
    }

    /// True while the computer owes a move.
    pub fn computer_to_move(&self) -> bool {
        self.screen == Screen::Playing
            && self.mode == GameMode::Computer
            && !self.session.is_over()
            && self.session.to_move() == Player::O
    }

    /// Text for the turn indicator.
    pub fn turn_label(&self) -> String {
        match self.session.status() {
            GameStatus::InProgress if self.computer_thinking => "O (computer)".to_string(),
            GameStatus::InProgress => self.session.to_move().to_string(),
            _ => "-".to_string(),
        }
    }

    /// Handles a key press. Returns a request when the computer must move.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ComputerRequest> {
        let action = action_for(key)?;
        debug!(?action, screen = ?self.screen, "Handling action");

        match (self.screen, action) {
            (_, Action::Quit) => {
                self.should_quit = true;
                None
            }
            (Screen::ModeSelect { selected }, Action::Cursor(KeyCode::Up | KeyCode::Down)) => {
                let selected = match selected {
                    GameMode::Friend => GameMode::Computer,
                    GameMode::Computer => GameMode::Friend,
                };
                self.screen = Screen::ModeSelect { selected };
                None
            }
            (Screen::ModeSelect { selected }, Action::Select) => self.start(selected),
            (Screen::ModeSelect { .. }, Action::Place(Position::TopLeft)) => {
                self.start(GameMode::Friend)
            }
            (Screen::ModeSelect { .. }, Action::Place(Position::TopCenter)) => {
                self.start(GameMode::Computer)
            }
            (Screen::ModeSelect { .. }, _) => None,
            (Screen::Playing, Action::Cursor(key)) => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            (Screen::Playing, Action::Select) => self.human_move(self.cursor),
            (Screen::Playing, Action::Place(pos)) => {
                self.cursor = pos;
                self.human_move(pos)
            }
            (Screen::Playing, Action::Restart) => self.restart(),
            (Screen::Playing, Action::Menu) => {
                self.back_to_menu();
                None
            }
            (Screen::Playing, Action::ToggleHints) => {
                self.show_hints = !self.show_hints;
                self.refresh_hints();
                None
            }
        }
    }

    /// Starts a fresh game in `mode`.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) -> Option<ComputerRequest> {
        info!(%mode, "Starting game");
        self.mode = mode;
        self.screen = Screen::Playing;
        self.restart()
    }

    /// Restarts the game in the current mode.
    ///
    /// Any computer reply still in flight belongs to the old game and will
    /// be discarded.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Option<ComputerRequest> {
        debug!("Restarting game");
        self.session.reset();
        self.generation += 1;
        self.computer_thinking = false;
        self.cursor = Position::Center;
        self.status_message = "Player X's turn".to_string();
        self.refresh_hints();
        None
    }

    /// Returns to the mode chooser, abandoning the current game.
    pub fn back_to_menu(&mut self) {
        self.generation += 1;
        self.computer_thinking = false;
        self.session.reset();
        self.screen = Screen::ModeSelect {
            selected: self.mode,
        };
        self.status_message = "Choose a game mode".to_string();
        self.hints = None;
    }

    fn human_move(&mut self, pos: Position) -> Option<ComputerRequest> {
        if self.computer_to_move() {
            self.status_message = "Wait for the computer to move".to_string();
            return None;
        }

        let player = self.session.to_move();
        match self.session.apply_move(pos.to_index(), player) {
            Ok(_) => {
                self.after_move(player, pos);
                self.request_if_computer_turn()
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
                None
            }
        }
    }

    /// Applies the computer's reply.
    ///
    /// Replies for an older game are ignored.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self, generation: u64, cell: usize) {
        if generation != self.generation || !self.computer_to_move() {
            debug!(generation, current = self.generation, "Dropping stale computer move");
            return;
        }
        self.computer_thinking = false;

        match self.session.apply_move(cell, Player::O) {
            Ok(_) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.after_move(Player::O, pos);
                }
            }
            Err(e) => {
                warn!(error = %e, cell, "Computer produced an invalid move");
                self.status_message = format!("Computer error: {e}. {RECOVER_HINT}");
            }
        }
    }

    /// Reports a failed search.
    pub fn computer_failed(&mut self, generation: u64, reason: &str) {
        if generation == self.generation {
            warn!(reason, "Computer search failed");
            self.computer_thinking = false;
            self.status_message = format!("Computer error: {reason}. {RECOVER_HINT}");
        }
    }

    fn request_if_computer_turn(&mut self) -> Option<ComputerRequest> {
        if !self.computer_to_move() {
            return None;
        }
        self.computer_thinking = true;
        self.status_message = "Computer is thinking...".to_string();
        Some(ComputerRequest {
            generation: self.generation,
            board: *self.session.board(),
        })
    }

    fn after_move(&mut self, player: Player, pos: Position) {
        self.status_message = match self.session.status() {
            GameStatus::InProgress => {
                format!("{player} played {}. Player {}'s turn", pos.label(), self.session.to_move())
            }
            GameStatus::Won(winner) => {
                self.ring_bell = true;
                format!("Player {winner} Wins! Press 'r' to play again or 'm' for menu.")
            }
            GameStatus::Draw => {
                self.ring_bell = true;
                "It's a Draw! Press 'r' to play again or 'm' for menu.".to_string()
            }
        };
        self.refresh_hints();
    }

    fn refresh_hints(&mut self) {
        self.hints = (self.show_hints && !self.session.is_over())
            .then(|| move_scores(self.session.board(), self.session.to_move()));
    }
}
