//! Command-line interface.

use crate::TuiConfig;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal. Click a cell to place a mark.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with mouse support", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide cell numbers in empty cells
    #[arg(long)]
    pub no_hints: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: TuiConfig) -> TuiConfig {
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if self.no_hints {
            config = config.with_show_hints(false);
        }
        config
    }
}
