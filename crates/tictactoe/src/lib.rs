//! Tic-tac-toe game logic.
//!
//! A small, pure rules engine for two-player tic-tac-toe:
//!
//! - **Board**: nine squares addressed by [`Position`] (1-9, row-major)
//! - **Rules**: win detection over the eight fixed lines and full-board detection
//! - **Game**: the turn state machine (`AwaitingMove` → `Won` / `Draw`, back via reset)
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft)?;     // X
//! game.play(Position::TopCenter)?;   // O
//! game.play(Position::Center)?;      // X
//! game.play(Position::TopRight)?;    // O
//! let status = game.play(Position::BottomRight)?;
//! assert_eq!(status, GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod status;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{Invariant, InvariantViolation, MarkBalanceInvariant, SingleWinnerInvariant};
pub use position::Position;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
