//! Runtime configuration for the console game, read from the environment.
//!
//! | variable                | values                      | default   |
//! |-------------------------|-----------------------------|-----------|
//! | `CONSOLE_CHESS_PIECES`  | `unicode`, `ascii`          | `unicode` |
//! | `CONSOLE_CHESS_START`   | FEN piece-placement field   | standard  |
//! | `CONSOLE_CHESS_FIRST`   | `white`, `black`            | `white`   |
//! | `CONSOLE_CHESS_COLOR`   | `1`, `0`                    | `1`       |
//! | `CONSOLE_CHESS_CLEAR`   | `1`, `0`                    | `1`       |
//! | `CONSOLE_CHESS_VERBOSE` | `1`, `0`                    | `0`       |
//!
//! Unrecognized values fall back to the default.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::utils::fen_parser::parse_placement;
use crate::utils::render_game_state::PieceStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub piece_style: PieceStyle,
    /// Placement to start from instead of the standard position.
    pub start_placement: Option<String>,
    pub first_to_move: Color,
    /// ANSI checkerboard with per-side piece colors.
    pub colored: bool,
    /// Clear the terminal before each redraw.
    pub clear_screen: bool,
    /// Print `info string` diagnostics to stderr.
    pub verbose: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            piece_style: PieceStyle::Unicode,
            start_placement: None,
            first_to_move: Color::White,
            colored: true,
            clear_screen: true,
            verbose: false,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in
    /// `from_env`, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let piece_style = lookup("CONSOLE_CHESS_PIECES")
            .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                "unicode" => Some(PieceStyle::Unicode),
                "ascii" => Some(PieceStyle::Ascii),
                _ => None,
            })
            .unwrap_or(defaults.piece_style);

        let start_placement = lookup("CONSOLE_CHESS_START")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());

        let first_to_move = lookup("CONSOLE_CHESS_FIRST")
            .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                "white" | "w" => Some(Color::White),
                "black" | "b" => Some(Color::Black),
                _ => None,
            })
            .unwrap_or(defaults.first_to_move);

        let colored = lookup("CONSOLE_CHESS_COLOR")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.colored);

        let clear_screen = lookup("CONSOLE_CHESS_CLEAR")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.clear_screen);

        let verbose = lookup("CONSOLE_CHESS_VERBOSE")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.verbose);

        Self {
            piece_style,
            start_placement,
            first_to_move,
            colored,
            clear_screen,
            verbose,
        }
    }

    /// The board the game starts from.
    pub fn starting_board(&self) -> Result<Board, ChessErrors> {
        match &self.start_placement {
            Some(placement) => parse_placement(placement),
            None => Ok(Board::new()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ConsoleConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), ConsoleConfig::default());
        assert_eq!(
            config_from(&[]).starting_board().expect("default board"),
            Board::new()
        );
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            ("CONSOLE_CHESS_PIECES", "ASCII"),
            ("CONSOLE_CHESS_START", "k7/2K5/1Q6/8/8/8/8/8"),
            ("CONSOLE_CHESS_FIRST", "black"),
            ("CONSOLE_CHESS_COLOR", "off"),
            ("CONSOLE_CHESS_CLEAR", "0"),
            ("CONSOLE_CHESS_VERBOSE", "yes"),
        ]);
        assert_eq!(config.piece_style, PieceStyle::Ascii);
        assert_eq!(config.first_to_move, Color::Black);
        assert!(!config.colored);
        assert!(!config.clear_screen);
        assert!(config.verbose);
        assert_eq!(
            config.starting_board().expect("placement should parse"),
            parse_placement("k7/2K5/1Q6/8/8/8/8/8").expect("placement should parse")
        );
    }

    #[test]
    fn unrecognized_values_fall_back() {
        let config = config_from(&[
            ("CONSOLE_CHESS_PIECES", "emoji"),
            ("CONSOLE_CHESS_FIRST", "green"),
            ("CONSOLE_CHESS_CLEAR", "maybe"),
        ]);
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn bad_start_placement_is_an_error() {
        let config = config_from(&[("CONSOLE_CHESS_START", "8/8")]);
        assert!(matches!(
            config.starting_board(),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
    }
}
