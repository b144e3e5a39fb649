//! Point-and-click terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: application state; routes clicks and keys into the [`tictactoe`] engine
//! - **UI**: ratatui rendering; every draw rebuilds the [`ClickTargets`] table
//!   that maps screen regions back to cells and buttons
//! - **Terminal**: raw mode, mouse capture and the event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;

pub mod ui;

pub use app::{App, Dialog};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Command, CursorMove, command_for_key, move_cursor};
pub use terminal::{run, run_app};
pub use ui::{ClickTargets, Target};
