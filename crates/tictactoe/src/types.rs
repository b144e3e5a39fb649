//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `player`'s mark on the cell numbered `cell` (1-9).
    ///
    /// Fails without touching the board when the number is not a cell
    /// or the cell is already taken.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, cell: u8, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_number(cell).ok_or(MoveError::InvalidPosition(cell))?;
        self.place(pos, player)?;
        Ok(pos)
    }

    /// Places `player`'s mark at `pos` if the square is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(%pos, "Square already occupied");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns true if `player` holds any complete line.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    /// Returns true if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            match self.get(*pos) {
                Square::Empty => result.push_str(&pos.number().to_string()),
                Square::Occupied(player) => result.push_str(&player.to_string()),
            }
            if i % 3 < 2 {
                result.push('|');
            } else if i < 8 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
