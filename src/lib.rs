//! Crate root module declarations for the console chess engine.
//!
//! The core is `game_state` (board, move memento, position classification)
//! plus `moves` (one movement rule per piece kind). `utils` holds the thin
//! text helpers around it and `console` the interactive turn loop used by the
//! binary.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_memento;
    pub mod position_status;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_config;
    pub mod turn_driver;
}
