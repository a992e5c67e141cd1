//! Tic-tac-toe - terminal game with jump-to-move history.

use anyhow::Result;
use clap::Parser;
use tictactoe_core::HistoryOrder;
use tictactoe_tui::{Cli, Command, init_file_logging, init_stderr_logging, replay, run_tui};

fn order(reversed: bool) -> HistoryOrder {
    if reversed {
        HistoryOrder::Reversed
    } else {
        HistoryOrder::Chronological
    }
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    match Cli::parse().into_command() {
        Command::Play { reversed, log_file } => {
            init_file_logging(&log_file)?;
            run_tui(order(reversed))
        }
        Command::Replay {
            cells,
            jump,
            reversed,
            json,
        } => {
            init_stderr_logging();
            let game = replay::replay(&cells, jump, order(reversed))?;
            if json {
                println!("{}", replay::render_json(&game.view())?);
            } else {
                print!("{}", replay::render_text(&game));
            }
            Ok(())
        }
    }
}
