//! Derived game status.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where the game stands, computed from the board and the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the given player to place a mark.
    AwaitingMove(Player),
    /// The player completed a line.
    Won(Player),
    /// Board full with no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::AwaitingMove(player) => write!(f, "Player {}'s turn", player),
            GameStatus::Won(player) => write!(f, "{} has won the game!", player),
            GameStatus::Draw => write!(f, "The game is a tie!"),
        }
    }
}
