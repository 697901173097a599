//! Console turn loop.
//!
//! Alternates colors, classifies each position before asking for input, reads
//! a from/to square pair, and hands it to `Board::attempt_legal_move`. Generic
//! over the reader and writer so scripted games can drive it.

use std::io::{BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::console::console_config::ConsoleConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position_status::{MoveRejection, PositionStatus};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::render_game_state::{render_board, render_board_colored};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// How a console game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { loser: Color },
    Stalemate,
    /// Input ended before the game did.
    Abandoned,
}

/// Play a game on `board` until checkmate, stalemate or end of input.
pub fn run_game<R: BufRead, W: Write>(
    board: &mut Board,
    input: R,
    output: W,
    config: &ConsoleConfig,
) -> Result<GameOutcome, ChessErrors> {
    let mut driver = TurnDriver {
        board,
        input,
        output,
        config,
    };
    driver.run()
}

struct TurnDriver<'a, R, W> {
    board: &'a mut Board,
    input: R,
    output: W,
    config: &'a ConsoleConfig,
}

impl<R: BufRead, W: Write> TurnDriver<'_, R, W> {
    fn run(&mut self) -> Result<GameOutcome, ChessErrors> {
        self.draw()?;
        let mut color = self.config.first_to_move;

        loop {
            let status = self.board.classify(color)?;
            if self.config.verbose {
                eprintln!("info string classify {color} -> {status:?}");
            }

            match status {
                PositionStatus::Checkmate => {
                    writeln!(self.output, "Checkmate! {color} lost!")?;
                    return Ok(GameOutcome::Checkmate { loser: color });
                }
                PositionStatus::Stalemate => {
                    writeln!(self.output, "Stalemate! It's a draw!")?;
                    return Ok(GameOutcome::Stalemate);
                }
                PositionStatus::Continue => {}
            }

            if !self.play_turn(color)? {
                writeln!(self.output, "Input closed, game abandoned.")?;
                return Ok(GameOutcome::Abandoned);
            }

            self.draw()?;
            color = color.opposite();
        }
    }

    /// One move for `color`. `Ok(false)` when input runs out.
    fn play_turn(&mut self, color: Color) -> Result<bool, ChessErrors> {
        writeln!(self.output, "{color} to move")?;

        loop {
            let Some(from) = self.read_square(color, "from")? else {
                return Ok(false);
            };

            if self.board.piece_at(from).map_or(true, |piece| piece.color != color) {
                self.redraw_with_message(color, "That is not your piece!")?;
                continue;
            }

            let Some(to) = self.read_square(color, "to")? else {
                return Ok(false);
            };

            if self.board.attempt_legal_move(from, to, color)? {
                if self.config.verbose {
                    eprintln!(
                        "info string {color} played {}{}",
                        square_to_algebraic(from),
                        square_to_algebraic(to)
                    );
                }
                return Ok(true);
            }

            let rejection = self.board.move_rejection(from, to, color)?;
            if self.config.verbose {
                eprintln!(
                    "info string {color} {}{} rejected: {rejection:?}",
                    square_to_algebraic(from),
                    square_to_algebraic(to)
                );
            }
            self.redraw_with_message(color, rejection_message(rejection))?;
        }
    }

    /// Prompt until a well-formed square is read. `Ok(None)` on end of input.
    fn read_square(&mut self, color: Color, prompt: &str) -> Result<Option<Square>, ChessErrors> {
        loop {
            write!(self.output, "{prompt}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match algebraic_to_square(&line) {
                Ok(square) => return Ok(Some(square)),
                Err(_) => self.redraw_with_message(color, "Invalid coordinates!")?,
            }
        }
    }

    fn draw(&mut self) -> Result<(), ChessErrors> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        let view = if self.config.colored {
            render_board_colored(self.board, self.config.piece_style)
        } else {
            render_board(self.board, self.config.piece_style)
        };
        writeln!(self.output, "{view}")?;
        Ok(())
    }

    fn redraw_with_message(&mut self, color: Color, message: &str) -> Result<(), ChessErrors> {
        self.draw()?;
        writeln!(self.output, "{color} to move")?;
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

fn rejection_message(rejection: Option<MoveRejection>) -> &'static str {
    match rejection {
        Some(MoveRejection::EmptyOrigin) | Some(MoveRejection::NotYourPiece) => {
            "That is not your piece!"
        }
        Some(MoveRejection::IllegalStep) => "That piece can't move there!",
        Some(MoveRejection::LeavesKingInCheck) => "That move would leave your king in check!",
        None => "You can't move there!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;
    use crate::utils::render_game_state::PieceStyle;

    fn quiet_config() -> ConsoleConfig {
        ConsoleConfig {
            piece_style: PieceStyle::Ascii,
            colored: false,
            clear_screen: false,
            ..ConsoleConfig::default()
        }
    }

    fn play(board: &mut Board, script: &str, config: &ConsoleConfig) -> (GameOutcome, String) {
        let mut output = Vec::new();
        let outcome =
            run_game(board, script.as_bytes(), &mut output, config).expect("game should run");
        (outcome, String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn fools_mate_ends_with_white_checkmated() {
        let mut board = Board::new();
        let (outcome, transcript) = play(
            &mut board,
            "f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\n",
            &quiet_config(),
        );
        assert_eq!(outcome, GameOutcome::Checkmate { loser: Color::White });
        assert!(transcript.contains("Checkmate! white lost!"));
    }

    #[test]
    fn stalemate_reported_before_any_input() {
        let mut board = parse_placement("k7/2K5/1Q6/8/8/8/8/8").expect("placement should parse");
        let config = ConsoleConfig {
            first_to_move: Color::Black,
            ..quiet_config()
        };
        let (outcome, transcript) = play(&mut board, "", &config);
        assert_eq!(outcome, GameOutcome::Stalemate);
        assert!(transcript.contains("Stalemate! It's a draw!"));
    }

    #[test]
    fn bad_input_is_reprompted_until_input_ends() {
        let mut board = Board::new();
        let before = board.clone();
        let (outcome, transcript) = play(&mut board, "z9\ne7\ne2\ne5\n", &quiet_config());
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(transcript.contains("Invalid coordinates!"));
        assert!(transcript.contains("That is not your piece!"));
        assert!(transcript.contains("That piece can't move there!"));
        assert_eq!(board, before);
    }

    #[test]
    fn self_check_is_explained() {
        let mut board = parse_placement("k3r3/8/8/8/8/8/4B3/4K3").expect("placement should parse");
        let (outcome, transcript) = play(&mut board, "e2\nd3\n", &quiet_config());
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(transcript.contains("That move would leave your king in check!"));
    }

    #[test]
    fn colored_config_draws_checkerboard() {
        let mut board = Board::new();
        let config = ConsoleConfig {
            colored: true,
            ..quiet_config()
        };
        let (outcome, transcript) = play(&mut board, "", &config);
        assert_eq!(outcome, GameOutcome::Abandoned);
        assert!(transcript.contains("\x1b[47m"));
        assert!(transcript.contains("\x1b[34m r "));

        let (_, plain) = play(&mut Board::new(), "", &quiet_config());
        assert!(!plain.contains('\x1b'));
    }

    #[test]
    fn turns_alternate_between_colors() {
        let mut board = Board::new();
        let (outcome, transcript) = play(&mut board, "e2\ne4\ne7\ne5\n", &quiet_config());
        assert_eq!(outcome, GameOutcome::Abandoned);
        let white_turn = transcript.find("white to move").expect("white prompted");
        let black_turn = transcript.find("black to move").expect("black prompted");
        assert!(white_turn < black_turn);
        assert!(transcript.matches("white to move").count() >= 2);
    }
}
