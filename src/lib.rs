//! Crate root module declarations for the Garnet Chess engine.
//!
//! This file exposes the engine subsystems (board model and move generation,
//! heuristic evaluation, tree search, automated movers, and setup utilities)
//! so binaries, tests, and external tooling can import stable module paths.

pub mod errors;

pub mod board {
    pub mod board_engine;
    pub mod chess_types;
    pub mod position;
    pub mod tables;
}

pub mod movegen {
    pub mod bishop;
    pub mod candidate;
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod queen;
    pub mod ray;
    pub mod rook;
    pub mod summary;
}

pub mod eval {
    pub mod evaluator;
}

pub mod search {
    pub mod clock;
    pub mod search_engine;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod utils {
    pub mod display;
    pub mod fen;
}
