//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Position;

/// Default log file for the interactive UI.
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with jump-to-move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen command, falling back to an interactive game.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            reversed: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the move list newest first
        #[arg(long)]
        reversed: bool,

        /// File to write logs to (the terminal is busy drawing the game)
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Play a sequence of moves headlessly and print the result
    Replay {
        /// Cells to play in order: index 0-8 or label such as "center"
        #[arg(value_parser = parse_position)]
        cells: Vec<Position>,

        /// Jump to this history step after playing
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        reversed: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell given as an index (0-8) or a position label.
pub fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("invalid cell '{}': expected 0-8 or a label like 'center'", s))
}
