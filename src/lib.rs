//! Crate root module declarations for the Quince chess rules engine.
//!
//! Exposes the bitboard primitives, game state and persistent `Game` node,
//! move generation with perft, and the notation helpers so binaries,
//! benches and tests can import stable module paths.

pub mod bitboard {
    pub mod bitboard;
    pub mod direction;
    pub mod lines;
    pub mod sliding;
}

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod game_result;
    pub mod game_state;
    pub mod position;
    pub mod position_key;
    pub mod terminal;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}
