use std::io;
use std::process::ExitCode;

use console_chess::console::console_config::ConsoleConfig;
use console_chess::console::turn_driver::run_game;

fn main() -> ExitCode {
    let config = ConsoleConfig::from_env();

    let mut board = match config.starting_board() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("info string cannot set up board: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_game(&mut board, stdin.lock(), stdout.lock(), &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("info string game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
