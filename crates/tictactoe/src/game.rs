//! Turn state machine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and the player to move. The status is never stored;
/// [`Game::status`] derives it from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    last_move: Option<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    ///
    /// After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recent successful move since the last reset.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.count(Player::X) + self.board.count(Player::O)
    }

    /// Returns true if `player` holds a complete line.
    pub fn is_winner(&self, player: Player) -> bool {
        self.board.is_winner(player)
    }

    /// Returns true if no square is empty.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Derives the current status from the board.
    pub fn status(&self) -> GameStatus {
        if self.board.is_winner(self.current_player) {
            GameStatus::Won(self.current_player)
        } else if self.board.is_winner(self.current_player.opponent()) {
            GameStatus::Won(self.current_player.opponent())
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::AwaitingMove(self.current_player)
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the status after the move. The player to move only
    /// changes when the game continues.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            debug!("Move rejected, game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.place(pos, player)?;
        self.last_move = Some(Move::new(player, pos));

        let status = if self.board.is_winner(player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            self.current_player = player.opponent();
            GameStatus::AwaitingMove(self.current_player)
        };

        debug_assert!(
            invariants::check_board(&self.board).is_ok(),
            "Board invariants violated: {:?}",
            invariants::check_board(&self.board)
        );

        if status.is_over() {
            info!(%status, moves = self.move_count(), "Game finished");
        } else {
            debug!(%pos, %status, "Move applied");
        }

        Ok(status)
    }

    /// Places the current player's mark on the cell numbered `cell` (1-9).
    #[instrument(skip(self))]
    pub fn play_number(&mut self, cell: u8) -> Result<GameStatus, MoveError> {
        let pos = Position::from_number(cell).ok_or(MoveError::InvalidPosition(cell))?;
        self.play(pos)
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.move_count(), "Resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
