//! Application state and logic.

use crate::input::{Command, command_for_key, move_cursor};
use crate::ui::{ClickTargets, Target};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use tictactoe::{Game, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Modal notice shown when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Dialog {
    title: String,
    message: String,
}

impl Dialog {
    /// Dialog announcing the end of a game.
    pub fn game_over(status: GameStatus) -> Self {
        Self {
            title: "Game Over".to_string(),
            message: status.to_string(),
        }
    }
}

/// Main application state.
///
/// Owned by the event loop; every input event is routed through it.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    dialog: Option<Dialog>,
    status_message: String,
    show_hints: bool,
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            dialog: None,
            status_message: GameStatus::AwaitingMove(tictactoe::Player::X).to_string(),
            show_hints,
            should_quit: false,
        }
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true while cells do not accept moves.
    pub fn is_frozen(&self) -> bool {
        self.dialog.is_some() || self.game.status().is_over()
    }

    /// Plays the current player's mark on `pos`.
    ///
    /// Ignored while the board is frozen. A finished game opens the
    /// game-over dialog.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, pos: Position) {
        if self.dialog.is_some() {
            debug!("Dialog open, ignoring cell");
            return;
        }
        if self.game.status().is_over() {
            self.status_message = "Game over. Click Reset or press R to play again.".to_string();
            return;
        }

        self.cursor = pos;
        match self.game.play(pos) {
            Ok(GameStatus::AwaitingMove(next)) => {
                self.status_message = format!("{} played {}. Player {}'s turn.", next.opponent(), pos, next);
            }
            Ok(status) => {
                info!(%status, "Showing game-over dialog");
                self.status_message = format!("{} Click Reset or press R to play again.", status);
                self.dialog = Some(Dialog::game_over(status));
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Starts a new game and re-enables every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.dialog = None;
        self.cursor = Position::Center;
        self.status_message = format!("New game. {}.", self.game.status());
    }

    /// Closes the game-over dialog; the board stays frozen until reset.
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            debug!("Dialog dismissed");
        }
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Dismiss => self.dismiss_dialog(),
            Command::Confirm => {
                if self.dialog.is_some() {
                    self.dismiss_dialog();
                } else {
                    self.click_cell(self.cursor);
                }
            }
            // The dialog is modal: it has to be dismissed first.
            Command::Reset if self.dialog.is_some() => {}
            Command::Reset => self.reset(),
            Command::Play(pos) => self.click_cell(pos),
            Command::Cursor(_) if self.dialog.is_some() => {}
            Command::Cursor(step) => self.cursor = move_cursor(self.cursor, step),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for_key(key) {
            self.apply(command);
        }
    }

    /// Handles a mouse event; only left-button presses do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, targets: &ClickTargets) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match targets.hit(mouse.column, mouse.row) {
            Some(Target::Dialog) => self.dismiss_dialog(),
            Some(Target::Cell(pos)) => self.click_cell(pos),
            Some(Target::Reset) if self.dialog.is_none() => self.reset(),
            Some(Target::Reset) | None => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
